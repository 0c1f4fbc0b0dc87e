pub mod builders;
pub mod definition;
pub mod factory;
pub mod handler;
pub mod operation;
pub mod route;

pub use builders::*;
pub use definition::*;
pub use factory::*;
pub use handler::*;
pub use operation::*;
pub use route::*;
