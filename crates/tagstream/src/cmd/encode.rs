use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use tagstream_collect::{AdaptiveCollector, EagerCollector, Sink, WriteSink};
use tagstream_wire::{
    EmptyMarshal, ExtensionMarshal, JsonMarshal, TileRecord, Value, WireError,
};

use crate::cmd::{CollectMode, EncodeArgs, ExtensionKind};
use crate::exit::{io_error, wire_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};

pub fn run(args: EncodeArgs) -> CliResult<i32> {
    if args.key.is_some() && matches!(args.mode, CollectMode::Eager) {
        return Err(CliError::new(USAGE, "--key requires --mode adaptive"));
    }

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|err| {
                io_error(&format!("failed opening {}", path.display()), err)
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let writer: Box<dyn Write> = match &args.out {
        Some(path) => {
            let file = File::create(path).map_err(|err| {
                io_error(&format!("failed creating {}", path.display()), err)
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    let marshal: Arc<dyn ExtensionMarshal> = match args.extension {
        ExtensionKind::Empty => Arc::new(EmptyMarshal),
        ExtensionKind::Json => Arc::new(JsonMarshal),
    };

    let sink = WriteSink::new(writer);
    match args.mode {
        CollectMode::Adaptive => encode_adaptive(reader, sink, marshal, args.key.as_deref()),
        CollectMode::Eager => encode_eager(reader, sink, marshal),
    }
}

fn encode_adaptive(
    reader: impl BufRead,
    sink: WriteSink<Box<dyn Write>>,
    marshal: Arc<dyn ExtensionMarshal>,
    key: Option<&str>,
) -> CliResult<i32> {
    let mut collector = AdaptiveCollector::with_marshal(sink, marshal);
    if let Some(raw) = key {
        collector = collector.with_key(parse_value(raw)?);
    }

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|err| io_error("failed reading input", err))?;
        if line.trim().is_empty() {
            continue;
        }
        let value = parse_value(&line)?;
        collector
            .collect(value)
            .map_err(|err| wire_error("encode failed", err))?;
        count += 1;
    }

    tracing::info!(values = count, mode = "adaptive", "stream encoded");
    collector
        .get_mut()
        .signal_end()
        .map_err(|err| io_error("failed signalling end of stream", err))?;
    Ok(SUCCESS)
}

fn encode_eager(
    reader: impl BufRead,
    sink: WriteSink<Box<dyn Write>>,
    marshal: Arc<dyn ExtensionMarshal>,
) -> CliResult<i32> {
    let mut collector = EagerCollector::with_marshal(sink, marshal);

    let mut count = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|err| io_error("failed reading input", err))?;
        if line.trim().is_empty() {
            continue;
        }
        let value = parse_value(&line)?;
        collector
            .collect(&value)
            .map_err(|err| wire_error("encode failed", err))?;
        count += 1;
    }

    tracing::info!(values = count, mode = "eager", "stream encoded");
    collector
        .get_mut()
        .signal_end()
        .map_err(|err| io_error("failed signalling end of stream", err))?;
    Ok(SUCCESS)
}

fn parse_value(raw: &str) -> CliResult<Value> {
    let json: serde_json::Value = serde_json::from_str(raw)
        .map_err(|err| CliError::new(DATA_INVALID, format!("input is not valid JSON: {err}")))?;
    json_to_value(json).map_err(|err| wire_error("input not encodable", err))
}

/// Convert a JSON value to a wire value.
///
/// Kind priority follows the wire dispatcher's documented order: boolean is
/// matched before number, string before the bytes object form. Two object
/// forms are recognized: `{"bytes": [..]}` and `{"tile": {..}}`; any other
/// object has no registered kind.
fn json_to_value(json: serde_json::Value) -> Result<Value, WireError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(v) => Ok(Value::Boolean(v)),
        serde_json::Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(Value::Int64(v))
            } else if let Some(v) = n.as_f64() {
                Ok(Value::Float64(v))
            } else {
                Err(WireError::UnsupportedType("out-of-range number"))
            }
        }
        serde_json::Value::String(v) => Ok(Value::String(v)),
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(json_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Tuple),
        serde_json::Value::Object(mut map) => {
            if map.len() == 1 {
                if let Some(bytes) = map.remove("bytes") {
                    let data: Vec<u8> = serde_json::from_value(bytes)
                        .map_err(|_| WireError::UnsupportedType("bytes object"))?;
                    return Ok(Value::Bytes(data.into()));
                }
                if let Some(tile) = map.remove("tile") {
                    let record: TileRecord = serde_json::from_value(tile)?;
                    return Ok(Value::Record(Box::new(record)));
                }
            }
            Err(WireError::UnsupportedType("object"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(raw: &str) -> Result<Value, WireError> {
        json_to_value(serde_json::from_str(raw).unwrap())
    }

    #[test]
    fn booleans_convert_before_numbers() {
        assert_eq!(convert("true").unwrap(), Value::Boolean(true));
        assert_eq!(convert("1").unwrap(), Value::Int64(1));
    }

    #[test]
    fn integers_convert_before_floats() {
        assert_eq!(convert("42").unwrap(), Value::Int64(42));
        assert_eq!(convert("2.5").unwrap(), Value::Float64(2.5));
    }

    #[test]
    fn arrays_become_tuples() {
        assert_eq!(
            convert("[1, \"a\", null]").unwrap(),
            Value::Tuple(vec![
                Value::Int64(1),
                Value::String("a".to_owned()),
                Value::Null,
            ])
        );
    }

    #[test]
    fn bytes_object_form() {
        assert_eq!(
            convert("{\"bytes\": [1, 2, 255]}").unwrap(),
            Value::Bytes(vec![1u8, 2, 255].into())
        );
    }

    #[test]
    fn tile_object_form() {
        let value = convert(
            "{\"tile\": {\"acquisition_date\": \"2015-03-02\", \"band\": 4, \
             \"left_upper_lon\": 0.0, \"left_upper_lat\": 0.0, \
             \"right_lower_lon\": 0.0, \"right_lower_lat\": 0.0, \
             \"path_row\": \"194/026\", \"height\": 0, \"width\": 0, \
             \"x_pixel_size\": 0.0, \"y_pixel_size\": 0.0}}",
        )
        .unwrap();
        match value {
            Value::Record(record) => {
                assert_eq!(record.acquisition_date, "2015-03-02");
                assert_eq!(record.band, 4);
                assert!(record.content.is_empty());
            }
            other => panic!("expected record, got {other:?}"),
        }
    }

    #[test]
    fn plain_objects_are_unsupported() {
        let err = convert("{\"x\": 1}").unwrap_err();
        assert!(matches!(err, WireError::UnsupportedType("object")));
    }

    #[test]
    fn key_with_eager_mode_is_a_usage_error() {
        let args = EncodeArgs {
            input: None,
            out: None,
            mode: CollectMode::Eager,
            key: Some("\"k\"".to_owned()),
            extension: ExtensionKind::Empty,
        };
        let err = run(args).unwrap_err();
        assert_eq!(err.code, USAGE);
    }
}
