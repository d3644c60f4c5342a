pub struct Logger {
    message: String,
}

impl Logger {
    pub fn new(message: String) -> Logger {
        Logger { message }
    }

    pub fn log(&self) {
        tracing::error!("{}", self.message);
    }
}
