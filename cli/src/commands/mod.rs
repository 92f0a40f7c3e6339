pub mod admit;
pub mod score;

use clap::ValueEnum;
use scheduler::ScoreMode;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum ModeArg {
    Least,
    Most,
}

impl From<ModeArg> for ScoreMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Least => ScoreMode::Least,
            ModeArg::Most => ScoreMode::Most,
        }
    }
}

