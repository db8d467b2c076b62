use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CharhashError::invalid_seed("x")
            .to_string()
            .contains("invalid seed:")
    );
    assert!(
        CharhashError::invalid_option("x")
            .to_string()
            .contains("invalid option:")
    );
    assert!(
        CharhashError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CharhashError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: CharhashError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, CharhashError::Serde(_)));
}
