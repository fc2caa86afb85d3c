mod card;
pub use card::*;

mod text_field;
pub use text_field::*;

mod role_button;
pub use role_button::*;

mod exercise_item;
pub use exercise_item::*;

mod workout_card;
pub use workout_card::*;

mod assignment_panel;
pub use assignment_panel::*;

mod rest_timer;
pub use rest_timer::*;
