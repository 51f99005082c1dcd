//! Screen stack
//!
//! Routes carry their own parameters. The stack never pops below its root.

/// A navigable screen and its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    WorkoutList,
    EditWorkout { workout_id: Option<String> },
    Camera,
}

impl Route {
    /// Title shown in the header chrome
    pub fn title(&self) -> &'static str {
        match self {
            Route::WorkoutList => "Workouts",
            Route::EditWorkout { .. } => crate::screens::edit_workout::TITLE,
            Route::Camera => "Camera",
        }
    }
}

/// Something screens can push routes onto and pop from
pub trait Navigate {
    fn navigate(&mut self, route: Route);
    fn back(&mut self) -> bool;
}

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> &Route {
        // stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    /// Pop the top route. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Pop until `route` matches the top, or the root is reached
    pub fn back_to(&mut self, matches: impl Fn(&Route) -> bool) {
        while !matches(self.current()) && self.back() {}
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn contains(&self, matches: impl Fn(&Route) -> bool) -> bool {
        self.stack.iter().any(matches)
    }

    /// `workout_id` parameter of the topmost EditWorkout route
    pub fn param_workout_id(&self) -> Option<&str> {
        self.stack.iter().rev().find_map(|route| match route {
            Route::EditWorkout { workout_id } => Some(workout_id.as_deref()),
            _ => None,
        })?
    }
}

impl Navigate for Navigator {
    fn navigate(&mut self, route: Route) {
        tracing::debug!(title = route.title(), "navigate");
        self.stack.push(route);
    }

    fn back(&mut self) -> bool {
        Navigator::back(self)
    }
}
