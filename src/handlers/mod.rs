pub mod deployments;
pub mod helpers;
pub mod middleware;
pub mod wizard;
