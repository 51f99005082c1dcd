//! Screens, one per route

pub mod camera;
pub mod edit_workout;
pub mod workout_list;

pub use camera::CameraScreen;
pub use edit_workout::EditWorkoutScreen;
pub use workout_list::WorkoutListScreen;
