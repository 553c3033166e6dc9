mod clock_service;
mod health_service;
#[cfg(any(test, feature = "mock"))]
mod mock_service;
mod weather_service;

pub use clock_service::*;
pub use health_service::*;
#[cfg(any(test, feature = "mock"))]
pub use mock_service::*;
pub use weather_service::*;
