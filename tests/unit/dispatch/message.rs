use super::*;

#[test]
fn search_request_decodes_from_ui_json() {
    let raw = r#"{"type":"search-recipes","query":"tofu","csvData":"A,B\n1,2"}"#;
    let request = PluginRequest::from_json(raw).unwrap();
    assert_eq!(
        request,
        PluginRequest::SearchRecipes {
            query: "tofu".to_string(),
            csv_data: "A,B\n1,2".to_string(),
        }
    );
}

#[test]
fn missing_query_defaults_to_empty() {
    let raw = r#"{"type":"search-recipes","csvData":"A\n1"}"#;
    let request = PluginRequest::from_json(raw).unwrap();
    let PluginRequest::SearchRecipes { query, .. } = request;
    assert_eq!(query, "");
}

#[test]
fn unknown_message_types_are_ignored() {
    assert_eq!(PluginRequest::from_json(r#"{"type":"resize","width":300}"#), None);
    assert_eq!(PluginRequest::from_json("not json at all"), None);
}

#[test]
fn events_serialize_with_type_tags() {
    let log = serde_json::to_value(UiEvent::log("parsing")).unwrap();
    assert_eq!(log["type"], "log");
    assert_eq!(log["message"], "parsing");

    let error = serde_json::to_value(UiEvent::error("no matches")).unwrap();
    assert_eq!(error["type"], "error");
    assert_eq!(error["message"], "no matches");
}
