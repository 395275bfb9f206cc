/// Caller-supplied facility that runs a unit of work after the current
/// operation completes, e.g. a request-scoped background-task list.
pub trait DeferredWorkSink: Send + Sync {
    fn defer(&self, job: Box<dyn FnOnce() + Send + 'static>);
}
