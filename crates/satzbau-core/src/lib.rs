//! # satzbau-core
//!
//! Platform-independent core of the sentence-builder exercise:
//!
//! - [`token`] / [`arrangement`] - word tokens with synthetic identity and the
//!   index-based list move that every reorder goes through
//! - [`geometry`] / [`collision`] - slot rectangles and closest-centre drop
//!   target resolution
//! - [`sensor`] - pointer (distance-activated) and keyboard drag sensors
//! - [`arranger`] - the working arrangement of one exercise plus its sensors
//! - [`page`] - the exercise page state machine with request sequencing
//! - [`api`] / [`driver`] - the backend client and the async load/check flows
//! - [`config`] - endpoint, timeout and log level settings
//!
//! Nothing here touches the DOM; the browser crate measures slots and
//! forwards events, the core decides what they mean.

pub mod api;
pub mod arrangement;
pub mod arranger;
pub mod collision;
pub mod config;
pub mod driver;
pub mod exercise;
pub mod geometry;
pub mod page;
pub mod sensor;
pub mod token;

pub use api::{ApiError, ExerciseApi, HttpExerciseApi};
pub use arrangement::{move_item, Arrangement};
pub use arranger::{SentenceArranger, TokenVisual};
pub use config::ApiConfig;
pub use driver::Completion;
pub use exercise::{SentenceExercise, Verdict};
pub use geometry::{Point, Rect, Slot};
pub use page::{ExercisePage, PageError, PageView, Ticket, VerdictPanel};
pub use sensor::{DragEnd, KeyCommand, KeyboardSensor, PointerSensor, StepDirection};
pub use token::{TokenId, WordToken};
