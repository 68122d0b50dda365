//! Partition the source inputs into retained and discarded sets.
//!
//! Retained inputs move out of the source document in keep-list order;
//! discarded inputs are deleted. Every name listed but absent, and
//! every input left unlisted, is recorded as a fault so the whole
//! mismatch is reported in one run.

use indexmap::IndexMap;
use itertools::Itertools;
use serde_json::Value;

use crate::{
    document::{InputSpec, SourceFields},
    error::{Error, Result},
    fault::Fault,
    manifest::InputLists,
};

/// Move keep-listed inputs out of `source` and delete discard-listed ones.
///
/// On success the `inputs` field is gone from `source`; if unlisted
/// inputs remain they stay behind (and are faulted here) so the
/// leftover-field verification sees them too.
pub fn partition_inputs(
    source: &mut SourceFields,
    lists: &InputLists,
    faults: &mut Vec<Fault>,
) -> Result<IndexMap<String, InputSpec>> {
    let mut kept = IndexMap::new();

    let Some(inputs) = source.get_mut("inputs").and_then(Value::as_object_mut) else {
        // No inputs object at all: every listed name is a miss.
        for name in &lists.keep {
            faults.push(Fault::MissingKeepInput(name.clone()));
        }
        for name in &lists.discard {
            faults.push(Fault::MissingDiscardInput(name.clone()));
        }
        return Ok(kept);
    };

    for name in &lists.keep {
        match inputs.shift_remove(name) {
            Some(value) => {
                let spec: InputSpec = serde_json::from_value(value)
                    .map_err(|err| Error::ParseError(format!("input '{name}': {err}")))?;
                kept.insert(name.clone(), spec);
            }
            None => faults.push(Fault::MissingKeepInput(name.clone())),
        }
    }

    for name in &lists.discard {
        if inputs.shift_remove(name).is_none() {
            faults.push(Fault::MissingDiscardInput(name.clone()));
        }
    }

    let leftover = inputs.keys().cloned().collect::<Vec<_>>();
    if leftover.is_empty() {
        source.shift_remove("inputs");
    } else {
        faults.push(Fault::UnaccountedInputs(leftover.iter().join(", ")));
    }

    Ok(kept)
}

/// Record a fault if any top-level field survived the translation.
pub fn verify_obliterated(source: &SourceFields, faults: &mut Vec<Fault>) {
    if !source.is_empty() {
        let remains = serde_json::to_string(source)
            .unwrap_or_else(|_| String::from("<unserializable remains>"));
        faults.push(Fault::UnhandledSourceFields(remains));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(json: &str) -> SourceFields {
        match serde_json::from_str::<Value>(json).unwrap() {
            Value::Object(fields) => fields,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    fn lists(keep: &[&str], discard: &[&str]) -> InputLists {
        InputLists {
            keep: keep.iter().map(ToString::to_string).collect(),
            discard: discard.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_partition_moves_kept_inputs_in_keep_list_order() {
        let mut fields = source(
            r#"{"inputs":{
                "logger":{"description":"Logger"},
                "extra-conf":{"description":"Extra conf"},
                "flakehub":{"description":"FlakeHub"}
            }}"#,
        );
        let mut faults = Vec::new();

        let kept = partition_inputs(
            &mut fields,
            &lists(&["extra-conf", "logger"], &["flakehub"]),
            &mut faults,
        )
        .unwrap();

        assert!(faults.is_empty());
        assert_eq!(
            kept.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["extra-conf", "logger"]
        );
        // Fully consumed: the inputs field itself is gone.
        assert!(fields.get("inputs").is_none());
    }

    #[test]
    fn test_partition_faults_every_missing_listed_input() {
        let mut fields = source(r#"{"inputs":{"logger":{"description":"Logger"}}}"#);
        let mut faults = Vec::new();

        let kept = partition_inputs(
            &mut fields,
            &lists(&["logger", "kvm"], &["flakehub"]),
            &mut faults,
        )
        .unwrap();

        assert_eq!(kept.len(), 1);
        assert_eq!(
            faults,
            vec![
                Fault::MissingKeepInput("kvm".into()),
                Fault::MissingDiscardInput("flakehub".into()),
            ]
        );
    }

    #[test]
    fn test_partition_faults_unlisted_inputs_and_leaves_them_behind() {
        let mut fields = source(
            r#"{"inputs":{
                "logger":{"description":"Logger"},
                "surprise":{"description":"Unknown"},
                "mystery":{"description":"Unknown too"}
            }}"#,
        );
        let mut faults = Vec::new();

        partition_inputs(&mut fields, &lists(&["logger"], &[]), &mut faults).unwrap();

        assert_eq!(
            faults,
            vec![Fault::UnaccountedInputs("surprise, mystery".into())]
        );
        // Leftovers stay so the obliteration check reports them as well.
        assert!(fields.get("inputs").is_some());
    }

    #[test]
    fn test_partition_with_no_inputs_object_faults_every_list_entry() {
        let mut fields = source("{}");
        let mut faults = Vec::new();

        let kept =
            partition_inputs(&mut fields, &lists(&["logger"], &["flakehub"]), &mut faults)
                .unwrap();

        assert!(kept.is_empty());
        assert_eq!(faults.len(), 2);
    }

    #[test]
    fn test_partition_rejects_malformed_input_options() {
        // "description" is the one option every input must declare.
        let mut fields = source(r#"{"inputs":{"logger":{"required":true}}}"#);
        let mut faults = Vec::new();

        let err = partition_inputs(&mut fields, &lists(&["logger"], &[]), &mut faults)
            .unwrap_err();

        assert!(matches!(err, Error::ParseError(_)));
        assert!(err.to_string().contains("logger"));
    }

    #[test]
    fn test_verify_obliterated_accepts_empty_source() {
        let mut faults = Vec::new();
        verify_obliterated(&source("{}"), &mut faults);
        assert!(faults.is_empty());
    }

    #[test]
    fn test_verify_obliterated_dumps_surviving_fields() {
        let mut faults = Vec::new();
        verify_obliterated(&source(r#"{"outputs":{"store-path":{}}}"#), &mut faults);

        assert_eq!(
            faults,
            vec![Fault::UnhandledSourceFields(
                r#"{"outputs":{"store-path":{}}}"#.into()
            )]
        );
    }
}
