use crate::domain::entities::record::Dimensions;

/// Identity, location, and platform facts of the page session.
///
/// These are plain reads of already-materialized values; they cannot fail.
pub trait PageSession: Send + Sync {
    fn user_agent(&self) -> String;
    fn url(&self) -> String;
    fn hostname(&self) -> String;
    fn scheme(&self) -> String;
    fn platform(&self) -> String;
    fn screen(&self) -> Dimensions;
    fn viewport(&self) -> Dimensions;
    fn pixel_ratio(&self) -> f64;
    fn language(&self) -> String;
    fn timezone(&self) -> String;
    fn do_not_track(&self) -> bool;

    /// The page origin (`scheme://hostname`), used as the first
    /// reachability-test endpoint.
    fn origin(&self) -> String {
        format!("{}://{}", self.scheme(), self.hostname())
    }
}
