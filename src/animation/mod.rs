pub(crate) mod ease;
pub(crate) mod scheduler;
pub(crate) mod timeline;
pub(crate) mod tween;
pub(crate) mod value;
