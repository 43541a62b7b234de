use crate::color::ColorSpace;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_color_space_argument(command);
        let command = Self::register_output_dir_argument(command);
        Self::register_key_step_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_color_space_argument(command: Command) -> Command {
        command.arg(Self::create_color_space_argument())
    }

    fn register_output_dir_argument(command: Command) -> Command {
        command.arg(Self::create_output_dir_argument())
    }

    fn register_key_step_argument(command: Command) -> Command {
        command.arg(Self::create_key_step_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the image to tune. Asked for interactively if missing or undecodable")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_color_space_argument() -> Arg {
        arg!(color_space: -s --color_space <SPACE> "Color space whose channels are thresholded")
            .default_value("RGB")
            .value_parser(value_parser!(ColorSpace))
    }

    fn create_output_dir_argument() -> Arg {
        arg!(output_dir: -o --output_dir <DIR> "Directory results are written into")
            .default_value("result")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_key_step_argument() -> Arg {
        arg!(key_step: -k --key_step <STEP> "Threshold change per key press")
            .default_value("1")
            .value_parser(value_parser!(u8).range(1..))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            color_space: Self::extract_color_space_argument(matches),
            output_dir: Self::extract_output_dir_argument(matches),
            key_step: Self::extract_key_step_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_color_space_argument(matches: &ArgMatches) -> ColorSpace {
        matches
            .get_one::<ColorSpace>("color_space")
            .expect("Color space must be provided, but was unset.")
            .to_owned()
    }

    fn extract_output_dir_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_dir")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_key_step_argument(matches: &ArgMatches) -> u8 {
        matches
            .get_one::<u8>("key_step")
            .expect("Key step must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
