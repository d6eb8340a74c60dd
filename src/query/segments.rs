/// Literal digit runs around the wildcards of a masked number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// One run before each wildcard, possibly empty
    pub leading: Vec<String>,
    /// Digits after the last wildcard, if any
    pub trailing: Option<String>,
}

/// Split `input` at every occurrence of `wildcard`
pub fn split_segments(input: &str, wildcard: char) -> Segments {
    let mut leading = Vec::new();
    let mut current = String::new();

    for character in input.chars() {
        if character == wildcard {
            leading.push(std::mem::take(&mut current));
        } else {
            current.push(character);
        }
    }

    Segments {
        leading,
        trailing: (!current.is_empty()).then_some(current),
    }
}
