mod document_roundtrip;
mod editor_workflow;
mod scenarios;
