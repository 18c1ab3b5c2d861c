use serde_json::Value;

/// Writes the environment into the event's `env` field.
///
/// An unset environment removes the field. Events that are not JSON objects
/// have nowhere to carry it and are left untouched.
pub fn stamp_env(event: &mut Value, env: Option<&str>) {
    let Some(fields) = event.as_object_mut() else {
        return;
    };

    match env {
        Some(env) => {
            fields.insert("env".to_string(), Value::String(env.to_string()));
        }
        None => {
            fields.remove("env");
        }
    }
}
