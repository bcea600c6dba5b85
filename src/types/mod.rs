pub mod request;
pub mod response;

pub use request::{
    decode_trip_request, Accommodation, Atmosphere, Choice, MainMode, Pace, Style,
    Transportation, TripRequest, Walking,
};
pub use response::{
    decode_trip_response, DailyPlan, ItemKind, Location, ScheduleItem, TripResponse,
};
