use crate::patterns::ParamField;

/// Input delivered by the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The visible area changed size.
    Resize {
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
    },
    /// Click on the drawing area: new hue seed and restart.
    Click,
    /// Raw text from one parameter control.
    ParameterInput { field: ParamField, raw: String },
    /// Pattern type picked from the selector.
    TypeChange(String),
    Randomize,
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::Click => EventKind::Click,
            Self::ParameterInput { field, .. } => EventKind::ParameterInput(*field),
            Self::TypeChange(_) => EventKind::TypeChange,
            Self::Randomize => EventKind::Randomize,
        }
    }
}

/// Listener slot an event is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Resize,
    Click,
    ParameterInput(ParamField),
    TypeChange,
    Randomize,
}

impl EventKind {
    /// Every listener slot, in binding order.
    pub fn all() -> Vec<Self> {
        let mut kinds = vec![Self::Resize, Self::Click];
        kinds.extend(ParamField::all().iter().map(|&field| Self::ParameterInput(field)));
        kinds.push(Self::TypeChange);
        kinds.push(Self::Randomize);
        kinds
    }
}
