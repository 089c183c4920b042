use std::fmt;

/// A name/number pair stored in the directory.
///
/// The name doubles as the lookup key. The number is the only field that
/// changes after creation: re-inserting an existing name overwrites it in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    pub fn new(name: String, number: String) -> Self {
        Contact { name, number }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub(crate) fn set_number(&mut self, number: String) {
        self.number = number;
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
