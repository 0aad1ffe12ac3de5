use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gwatch::exec::{ExecError, ExecutorBackend};

/// A fake executor that:
/// - records which commands were "run"
/// - succeeds, or fails with exit status 1 once `fail` is set.
#[derive(Clone, Default)]
pub struct FakeExecutor {
    executed: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl FakeExecutor {
    pub fn new(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            fail: false,
        }
    }

    pub fn failing(executed: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            executed,
            fail: true,
        }
    }
}

impl ExecutorBackend for FakeExecutor {
    fn execute<'a>(
        &'a mut self,
        command: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), ExecError>> + Send + 'a>> {
        let executed = Arc::clone(&self.executed);
        let fail = self.fail;

        Box::pin(async move {
            executed.lock().unwrap().push(command.to_string());

            if fail {
                Err(ExecError::Failed {
                    command: command.to_string(),
                    code: Some(1),
                })
            } else {
                Ok(())
            }
        })
    }
}
