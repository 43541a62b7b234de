use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    ImageSelectionAborted,
    UnableToReadUserInput(std::io::Error),
    UnableToWriteUserPrompt(std::io::Error),
    UnableToCreateWindow(&'static str, minifb::Error),
    UnableToUpdateWindow(&'static str, minifb::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageSelectionAborted => {
                write!(
                    f,
                    "Image selection was aborted before a valid image was loaded"
                )
            }
            Self::UnableToReadUserInput(error) => {
                write!(f, "Unable to read user input: {}", error)
            }
            Self::UnableToWriteUserPrompt(error) => {
                write!(f, "Unable to write prompt to the terminal: {}", error)
            }
            Self::UnableToCreateWindow(window_name, error) => {
                write!(f, "Unable to create window '{}': {}", window_name, error)
            }
            Self::UnableToUpdateWindow(window_name, error) => {
                write!(f, "Unable to update window '{}': {}", window_name, error)
            }
        }
    }
}

impl std::error::Error for Error {}
