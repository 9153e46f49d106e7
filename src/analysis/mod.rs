pub mod cleaning;
pub mod country;
pub mod evolution;
pub mod genre;
pub mod pipeline;
pub mod popularity;
pub mod region;
pub mod status;
pub mod utils;


pub use cleaning::*;
pub use country::*;
pub use evolution::*;
pub use genre::*;
pub use pipeline::*;
pub use popularity::*;
pub use region::*;
pub use status::*;
