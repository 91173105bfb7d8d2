mod drill_vm;

pub use drill_vm::{
    CardVm, DrillIntent, DrillVm, FeedbackTone, FeedbackVm, map_feedback,
};
