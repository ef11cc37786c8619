//! Request envelope rendering for the five service operations.
//!
//! The bodies are fixed SOAP 1.2 templates; caller-supplied values are
//! escaped before substitution so the document stays well-formed whatever
//! the credentials or ids contain.

use quick_xml::escape::escape;

use crate::core::client::constants::SERVICE_NAMESPACE;
use crate::news::SearchDirection;

/// Open-session request. The wire order is client name, login, language,
/// password (`mbl` carries the login and `mbla` the language).
pub(crate) fn open_session(
    client_name: &str,
    language: &str,
    login: &str,
    password: &str,
) -> String {
    format!(
        r#"<s:Envelope xmlns:s="http://www.w3.org/2003/05/soap-envelope">
    <s:Body>
        <osmreq xmlns="{SERVICE_NAMESPACE}">
            <mbci>{}</mbci>
            <mbcv>1</mbcv>
            <mbh>OnlyHeadline</mbh>
            <mbl>{}</mbl>
            <mbla>{}</mbla>
            <mbo>Windows</mbo>
            <mbp>{}</mbp>
        </osmreq>
    </s:Body>
</s:Envelope>"#,
        escape(client_name),
        escape(login),
        escape(language),
        escape(password),
    )
}

/// Products-list request: parameter-free; the session travels only in the
/// transport's cookie header.
pub(crate) fn products_list() -> String {
    r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope">
   <soap:Header/>
   <soap:Body/>
</soap:Envelope>"#
        .to_string()
}

pub(crate) fn realtime_news(direction: SearchDirection, product_id: &str, limit: u32) -> String {
    format!(
        r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope" xmlns:ifx="{SERVICE_NAMESPACE}">
   <soap:Header/>
   <soap:Body>
      <ifx:grnbpmreq>
         <ifx:direction>{}</ifx:direction>
         <ifx:mbcid>{}</ifx:mbcid>
         <ifx:mblnl>{}</ifx:mblnl>
         <ifx:mbsup></ifx:mbsup>
      </ifx:grnbpmreq>
   </soap:Body>
</soap:Envelope>"#,
        direction.as_wire(),
        escape(product_id),
        limit,
    )
}

/// Entire-news request; the composite id goes out unsplit.
pub(crate) fn entire_news(composite_id: &str) -> String {
    format!(
        r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope" xmlns:ifx="{SERVICE_NAMESPACE}">
   <soap:Header/>
   <soap:Body>
      <ifx:genmreq>
         <ifx:mbnid>{}</ifx:mbnid>
      </ifx:genmreq>
   </soap:Body>
</soap:Envelope>"#,
        escape(composite_id),
    )
}

pub(crate) fn close_session() -> String {
    format!(
        r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope" xmlns:ifx="{SERVICE_NAMESPACE}">
   <soap:Header/>
   <soap:Body>
      <ifx:CloseSession/>
   </soap:Body>
</soap:Envelope>"#
    )
}
