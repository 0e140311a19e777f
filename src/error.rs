use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PipelineError {
    InputRead(io::Error),
    Processing(String),
    OutputWrite(io::Error),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PipelineError::InputRead(ref err) => write!(f, "input read error: {}", err),
            PipelineError::Processing(ref msg) => write!(f, "processing error: {}", msg),
            PipelineError::OutputWrite(ref err) => write!(f, "output write error: {}", err),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            PipelineError::InputRead(ref err) => Some(err),
            PipelineError::Processing(_) => None,
            PipelineError::OutputWrite(ref err) => Some(err),
        }
    }
}
