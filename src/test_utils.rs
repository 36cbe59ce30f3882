use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;

use crate::infrastructure::LoggerTrait;

/// 记录到内存中的日志记录器，供测试断言
#[derive(Default)]
pub struct MemoryLogger {
    pub infos: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub debug: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn debug(&self) -> Vec<String> {
        self.debug.lock().unwrap().clone()
    }
}

impl LoggerTrait for MemoryLogger {
    fn is_enabled(&self) -> bool {
        true
    }

    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn warning(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn log_message(&self, message: &str) -> Result<()> {
        self.debug.lock().unwrap().push(message.to_string());
        Ok(())
    }

    fn finalize(&self, _matched_files: usize, _duration: Duration) -> Result<()> {
        Ok(())
    }
}
