use crate::proto::{Annotation, Application, Label};

/// Separates list elements and label/annotation groups.
pub const LIST_DELIMITER: char = ',';
/// Separates the parts inside a single label or annotation group.
pub const PART_DELIMITER: char = ';';

/// Raw create flags, exactly as typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationFields<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub description: &'a str,
    pub sources: &'a str,
    pub artifact_ids: &'a str,
    pub labels: &'a str,
    pub annotations: &'a str,
}

/// Assembles the create payload. The service assigns the uuid.
pub fn build_application(fields: &ApplicationFields<'_>) -> Application {
    Application {
        uuid: String::new(),
        name: fields.name.to_string(),
        description: fields.description.to_string(),
        namespace: fields.namespace.to_string(),
        sources: split_list(fields.sources),
        artifact_ids: split_list(fields.artifact_ids),
        labels: parse_labels(fields.labels),
        annotations: parse_annotations(fields.annotations),
    }
}

/// Splits on `,` keeping order, duplicates and empty elements. No trimming:
/// `""` yields `[""]` and `"a,"` yields `["a", ""]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER).map(str::to_string).collect()
}

/// `key;value` groups joined by `,`. Groups without `;` are dropped, parts
/// past the second are ignored.
pub fn parse_labels(raw: &str) -> Vec<Label> {
    groups(raw)
        .filter_map(|parts| match parts.as_slice() {
            [key, value, ..] => Some(Label {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        })
        .collect()
}

/// `origin;key;value` groups joined by `,`. Groups without `;` or with fewer
/// than three parts are dropped, parts past the third are ignored.
pub fn parse_annotations(raw: &str) -> Vec<Annotation> {
    groups(raw)
        .filter_map(|parts| match parts.as_slice() {
            [origin, key, value, ..] => Some(Annotation {
                origin: origin.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => None,
        })
        .collect()
}

// Only groups containing the part delimiter are yielded, already split.
fn groups(raw: &str) -> impl Iterator<Item = Vec<&str>> {
    raw.split(LIST_DELIMITER)
        .filter(|group| group.contains(PART_DELIMITER))
        .map(|group| group.split(PART_DELIMITER).collect())
}
