//! Centralized constants for the default endpoint and service namespace.

/// Default service endpoint; every operation POSTs here.
pub(crate) const DEFAULT_ENDPOINT: &str = "http://services.ifx.ru/IFXService.svc/";

/// Namespace of the service contract, used by request envelopes and by the
/// `action` parameter of the content-type header.
pub(crate) const SERVICE_NAMESPACE: &str = "http://ifx.ru/IFX3WebService";
