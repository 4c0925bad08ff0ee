//! Transform pipeline
//!
//! Processing is a chain of typed stages. Any [Runnable] can be appended to a
//! [Transform] with `.then()`, and the compiler checks that each stage's input type
//! is the previous stage's output type:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(CommentNormalization::new(true))   // String -> String
//!     .then(Parsing::new(DivisionGrammar));    // String -> ParseTree
//! ```
//!
//! The common chains are pre-built as `Lazy` statics in [standard]; the individual
//! stages live in [stages].

pub mod stages;
pub mod standard;

use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Generic error with message
    #[error("{0}")]
    Error(String),
    /// A named stage failed
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Anything that turns an `I` into an `O`. Implemented by the individual stages.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, returning a transform with the stage's output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Append a pre-built (static) transform.
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                next.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
