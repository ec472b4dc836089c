pub mod form_or_json;
pub mod htmx;

pub use form_or_json::FormOrJson;
pub use htmx::HxRequest;
