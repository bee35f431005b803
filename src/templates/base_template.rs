use crate::models::Notice;

/// Fields every page shares through `base.html`.
pub trait BaseTemplate {
    fn api_hostname(&self) -> &str;
    fn base_url(&self) -> &str;
    fn notices(&self) -> &[Notice];
    fn has_notices(&self) -> bool;
}

/// Implements BaseTemplate for a struct with the standard page fields
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn api_hostname(&self) -> &str {
                &self.api_hostname
            }
            fn base_url(&self) -> &str {
                &self.base_url
            }
            fn notices(&self) -> &[$crate::models::Notice] {
                &self.notices
            }
            fn has_notices(&self) -> bool {
                self.has_notices
            }
        }
    };
}
