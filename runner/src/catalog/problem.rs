/// A single runnable exercise: an annotation plus a stored closure.
///
/// The legacy harness kept a bare function pointer here; a boxed closure lets
/// registered problems capture their input configuration while staying
/// callable with no arguments.
pub struct Problem {
    annotation: String,
    run: Box<dyn Fn() -> anyhow::Result<f32>>,
}

impl Problem {
    pub fn new<F>(annotation: impl Into<String>, run: F) -> Self
    where
        F: Fn() -> anyhow::Result<f32> + 'static,
    {
        Self {
            annotation: annotation.into(),
            run: Box::new(run),
        }
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    pub fn execute(&self) -> anyhow::Result<f32> {
        (self.run)()
    }
}
