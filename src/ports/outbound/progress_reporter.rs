/// ProgressReporter port for reporting progress during a browse run
///
/// Progress goes to a side channel (stderr) so stdout carries only the report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the pipeline stages
    ///
    /// # Arguments
    /// * `current` - Stages completed so far
    /// * `total` - Total number of stages
    /// * `message` - Optional stage description
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
