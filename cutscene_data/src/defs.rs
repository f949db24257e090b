use serde::{Deserialize, Serialize};

/// Parameter kinds a precondition type can declare.
///
/// Each kind is written as a single character in the type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Integer,
    Double,
    Bool,
    String,
    Unknown,
    /// One value out of the type's enum list.
    EnumOne,
    /// Any number of values out of the type's enum list; consumes every remaining token.
    EnumMany,
    /// A tile position, stored as two consecutive values (x, y).
    Position,
}

impl ParamType {
    /// Map a type-table character to its parameter kind.
    ///
    /// Characters without a meaning decode as `Unknown` so that a table written
    /// for a newer editor still loads.
    pub fn from_char(c: char) -> ParamType {
        match c {
            'i' => ParamType::Integer,
            'd' => ParamType::Double,
            'b' => ParamType::Bool,
            's' => ParamType::String,
            'e' => ParamType::EnumOne,
            'E' => ParamType::EnumMany,
            'p' => ParamType::Position,
            _ => ParamType::Unknown,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ParamType::Integer => 'i',
            ParamType::Double => 'd',
            ParamType::Bool => 'b',
            ParamType::String => 's',
            ParamType::Unknown => 'u',
            ParamType::EnumOne => 'e',
            ParamType::EnumMany => 'E',
            ParamType::Position => 'p',
        }
    }

    pub fn is_enum(self) -> bool {
        matches!(self, ParamType::EnumOne | ParamType::EnumMany)
    }

    /// Number of fixed storage slots this kind occupies in `Precondition::params`.
    pub fn slots(self) -> usize {
        match self {
            ParamType::Position => 2,
            ParamType::EnumMany => 0,
            _ => 1,
        }
    }
}

/// Schema for one precondition kind, as loaded from the type table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionType {
    pub id: char,
    pub label: String,
    pub param_types: Vec<ParamType>,
    /// One label per entry in `param_types`; enum parameters carry an empty label.
    pub param_labels: Vec<String>,
    /// Allowed values for the type's enum parameter(s).
    pub enum_values: Vec<String>,
}

impl PreconditionType {
    /// Total fixed slots, with `Position` expanded and `EnumMany` collapsed.
    pub fn slot_count(&self) -> usize {
        self.param_types.iter().map(|p| p.slots()).sum()
    }

    /// True when an `EnumMany` parameter makes the arity open-ended.
    pub fn is_variadic(&self) -> bool {
        self.param_types.contains(&ParamType::EnumMany)
    }
}

/// A single entry gate of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precondition {
    /// Id of the `PreconditionType` this instance belongs to.
    pub type_id: char,
    #[serde(default)]
    pub params: Vec<String>,
}

/// Tile coordinates on the event map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where an actor stands when the event starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub pos: TilePos,
    pub facing: i32,
}

/// One script command, split into its verb and the untouched argument text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Command {
    pub verb: String,
    #[serde(default)]
    pub args_raw: String,
}

/// A named branch of script that other events can jump into.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BranchDef {
    pub name: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// A complete event: when it may start, how the scene is set up and what it runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventDef {
    pub id: i32,
    #[serde(default)]
    pub preconditions: Vec<Precondition>,
    pub music: String,
    pub viewport: TilePos,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// One decoded event line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventData {
    Branch(BranchDef),
    Event(EventDef),
}

impl EventData {
    pub fn commands(&self) -> &[Command] {
        match self {
            EventData::Branch(branch) => &branch.commands,
            EventData::Event(event) => &event.commands,
        }
    }

    /// Human-readable name used in logs and validation messages.
    pub fn describe(&self) -> String {
        match self {
            EventData::Branch(branch) => format!("branch '{}'", branch.name),
            EventData::Event(event) => format!("event {}", event.id),
        }
    }
}
