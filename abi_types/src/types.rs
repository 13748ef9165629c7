use serde_derive::{Deserialize, Serialize};

/* Separator between segments of a fully-qualified Cairo path */
pub const PATH_SEPARATOR: &str = "::";

/* Top-level compiled artifact. Only the `abi` array is modelled. */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct AbiDocument {
    pub abi: Vec<AbiItem>,
}

impl AbiDocument {
    /* Interface items in document order */
    pub fn interfaces(&self) -> impl Iterator<Item = &AbiInterface> {
        self.abi.iter().filter_map(|item| match item {
            AbiItem::Interface(interface) => Some(interface),
            _ => None,
        })
    }

    /* Top-level functions (not grouped in an interface) in document order */
    pub fn functions(&self) -> impl Iterator<Item = &AbiFunction> {
        self.abi.iter().filter_map(|item| match item {
            AbiItem::Function(function) => Some(function),
            _ => None,
        })
    }

    /* Items with a tag this model does not know */
    pub fn unknown_count(&self) -> usize {
        self.abi
            .iter()
            .filter(|item| matches!(item, AbiItem::Unknown))
            .count()
    }

    /* L1 handlers in document order */
    pub fn l1_handlers(&self) -> impl Iterator<Item = &AbiFunction> {
        self.abi.iter().filter_map(|item| match item {
            AbiItem::L1Handler(function) => Some(function),
            _ => None,
        })
    }
}

/* One entry of the `abi` array, discriminated on its `type` field */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AbiItem {
    Interface(AbiInterface),
    Function(AbiFunction),
    L1Handler(AbiFunction),
    /* impl, struct, enum, event, constructor and anything newer */
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AbiInterface {
    /* Fully-qualified path, e.g. `dojo_examples::actions::IActions` */
    pub name: String,
    #[serde(default)]
    pub items: Vec<InterfaceEntry>,
}

impl AbiInterface {
    /* Last path segment of the interface name */
    pub fn short_name(&self) -> &str {
        last_segment(&self.name)
    }

    /* Functions declared by this interface, in document order */
    pub fn functions(&self) -> impl Iterator<Item = &AbiFunction> {
        self.items.iter().filter_map(|entry| match entry {
            InterfaceEntry::Function(function) => Some(function),
            InterfaceEntry::Unknown => None,
        })
    }
}

/* Nested entry of an interface item */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InterfaceEntry {
    Function(AbiFunction),
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AbiFunction {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Param>,
    #[serde(default)]
    pub outputs: Vec<Param>,
    #[serde(default)]
    pub state_mutability: StateMutability,
}

impl AbiFunction {
    pub fn is_external(&self) -> bool {
        self.state_mutability == StateMutability::External
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(from = "String", into = "String")]
pub enum StateMutability {
    External,
    View,
    Other(String),
}

impl Default for StateMutability {
    fn default() -> Self {
        StateMutability::Other(String::new())
    }
}

impl From<String> for StateMutability {
    fn from(value: String) -> Self {
        match value.as_str() {
            "external" => StateMutability::External,
            "view" => StateMutability::View,
            _ => StateMutability::Other(value),
        }
    }
}

impl From<StateMutability> for String {
    fn from(value: StateMutability) -> Self {
        match value {
            StateMutability::External => "external".to_string(),
            StateMutability::View => "view".to_string(),
            StateMutability::Other(other) => other,
        }
    }
}

/* Function input or output. Outputs carry no name in the artifact. */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Param {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/* Last `::` segment of a fully-qualified path */
pub fn last_segment(path: &str) -> &str {
    path.rsplit(PATH_SEPARATOR).next().unwrap_or(path)
}
