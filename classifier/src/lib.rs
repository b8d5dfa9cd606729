//! # classifier
//!
//! Runs the pretrained skin-type model. A [`ModelBundle`] is loaded once and
//! installed into an [`InferenceInvoker`], which turns uploaded image bytes
//! into a [`shared::PredictionResult`].

pub mod bundle;
pub mod error;
pub mod invoker;
pub mod preprocess;
pub mod runtime;

pub use bundle::ModelBundle;
pub use error::{ClassifierError, Stage};
pub use invoker::{InferenceInvoker, ModelSlot, predict};
pub use preprocess::{decode_image, preprocess_image, to_input_tensor};
pub use runtime::{Classifier, OnnxClassifier};
