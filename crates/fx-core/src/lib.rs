pub mod bars;
pub mod constants;
pub mod lifecycle;
pub mod neural;
pub mod particles;
pub mod signals;
pub mod sphere;

pub use bars::*;
pub use constants::*;
pub use lifecycle::*;
pub use neural::*;
pub use particles::*;
pub use signals::*;
pub use sphere::*;
