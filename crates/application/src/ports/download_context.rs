//! Download context port

use apidoc_domain::{LoadingStatus, SecurityActivation};

/// Port onto the shared application state a download reads and updates.
///
/// Each setter is a discrete update intent. Implementations must apply
/// every intent atomically and in call order.
pub trait DownloadContext: Send + Sync {
    /// Returns the currently configured document URL.
    fn current_url(&self) -> String;

    /// Returns the active security activations, in application order.
    fn authorized_activations(&self) -> Vec<SecurityActivation>;

    /// Surfaces an error to the end user.
    fn report_error(&self, message: String);

    /// Records a loading status transition.
    fn set_loading_status(&self, status: LoadingStatus);

    /// Publishes the fetched document body.
    fn set_document_body(&self, text: String);

    /// Publishes the URL the document was fetched from.
    fn set_current_url(&self, url: String);
}
