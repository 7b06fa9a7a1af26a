use {
    argh::FromArgs,
    accelcfg::{Error, SlotRole},
    std::str::FromStr
};

/// accelcfg
#[derive(FromArgs)]
pub struct Args {
    #[argh(subcommand)]
    pub command: Command
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum Command {
    List(List),
    Layout(Layout),
    Commit(Commit),
    Load(Load)
}

/// lists the acceleration types and their indices
#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
pub struct List {}

/// shows the parameters an acceleration type uses
#[derive(FromArgs)]
#[argh(subcommand, name = "layout")]
pub struct Layout {
    /// acceleration type (defaults to the configured one)
    #[argh(positional)]
    pub variant: Option<String>,
    /// y of the first row, overriding the configured one
    #[argh(option)]
    pub top: Option<i32>
}

/// prints the arguments for an acceleration type
#[derive(FromArgs)]
#[argh(subcommand, name = "commit")]
pub struct Commit {
    /// acceleration type (defaults to the configured one)
    #[argh(positional)]
    pub variant: Option<String>,
    /// sets a parameter, e.g. `--set acceleration=0.5`
    #[argh(option)]
    pub set: Vec<Assignment>,
    /// edits the sensitivity cap instead of the gain cap
    #[argh(switch)]
    pub sensitivity_cap: bool,
    /// edits the legacy offset instead of the current one
    #[argh(switch)]
    pub legacy_offset: bool
}

/// reads arguments from stdin and shows them as the given acceleration type
#[derive(FromArgs)]
#[argh(subcommand, name = "load")]
pub struct Load {
    /// acceleration type index
    #[argh(positional)]
    pub index: u32
}

/// `<parameter>=<value>`
pub struct Assignment {
    pub role: SlotRole,
    pub value: String
}

impl FromStr for Assignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (role, value) = s
            .split_once('=')
            .ok_or_else(|| Error::Assignment(s.into()))?;

        Ok(Assignment {
            role: role.parse()?,
            value: value.into()
        })
    }
}
