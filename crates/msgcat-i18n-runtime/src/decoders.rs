use std::str;

use msgcat_i18n_core::{DecodeError, DecodeFn, DecoderRegistry, RawValue};

pub fn json_decoder() -> DecodeFn {
    Box::new(|buf: &[u8]| -> Result<RawValue, DecodeError> {
        Ok(serde_json::from_slice::<RawValue>(buf)?)
    })
}

pub fn toml_decoder() -> DecodeFn {
    Box::new(|buf: &[u8]| -> Result<RawValue, DecodeError> {
        let text = str::from_utf8(buf)?;
        Ok(toml::from_str::<RawValue>(text)?)
    })
}

pub fn yaml_decoder() -> DecodeFn {
    Box::new(|buf: &[u8]| -> Result<RawValue, DecodeError> {
        Ok(serde_yaml::from_slice::<RawValue>(buf)?)
    })
}

/// Registry with the stock decoders under their file suffixes.
pub fn default_registry() -> DecoderRegistry {
    let mut registry = DecoderRegistry::new();
    registry.insert("json".to_owned(), json_decoder());
    registry.insert("toml".to_owned(), toml_decoder());
    registry.insert("yaml".to_owned(), yaml_decoder());
    registry
}
