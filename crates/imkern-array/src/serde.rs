use crate::{AxisRange, CenteredArray};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<'de> serde::Deserialize<'de> for AxisRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct AxisRangeData {
            first: isize,
            len: usize,
        }

        let AxisRangeData { first, len } = AxisRangeData::deserialize(deserializer)?;
        AxisRange::from_first_len(first, len).map_err(serde::de::Error::custom)
    }
}

impl<T, const N: usize> serde::Serialize for CenteredArray<T, N>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("CenteredArray", 2)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("ranges", &self.ranges().to_vec())?;
        state.end()
    }
}

impl<'de, T, const N: usize> serde::Deserialize<'de> for CenteredArray<T, N>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CenteredArrayData<T> {
            data: Vec<T>,
            ranges: Vec<AxisRange>,
        }

        let CenteredArrayData { data, ranges } = CenteredArrayData::deserialize(deserializer)?;

        let ranges: [AxisRange; N] = ranges
            .try_into()
            .map_err(|_| serde::de::Error::custom("Invalid number of ranges"))?;

        CenteredArray::from_ranges_vec(ranges, data).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AxisRange, CenteredArray};

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let array = CenteredArray::from_ranges_fn(
            [AxisRange::new(-1, 2), AxisRange::symmetric(1)],
            |[i, j]| (i * 3 + j) as f64,
        );
        let serialized = serde_json::to_string(&array)?;
        let deserialized: CenteredArray<f64, 2> = serde_json::from_str(&serialized)?;
        assert_eq!(array, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_rejects_bad_shape() {
        let json = r#"{"data":[1.0,2.0],"ranges":[{"first":-1,"len":3}]}"#;
        let res: Result<CenteredArray<f64, 1>, _> = serde_json::from_str(json);
        assert!(res.is_err());
    }

    #[test]
    fn test_serde_rejects_overflowing_ranges() {
        let huge = 1u64 << 32;
        let json = format!(
            r#"{{"data":[],"ranges":[{{"first":0,"len":{huge}}},{{"first":0,"len":{huge}}}]}}"#
        );
        let res: Result<CenteredArray<f64, 2>, _> = serde_json::from_str(&json);
        if cfg!(target_pointer_width = "64") {
            let err = res.err().map(|e| e.to_string()).unwrap_or_default();
            assert!(err.contains("more than usize::MAX"), "{err}");
        } else {
            assert!(res.is_err());
        }

        let json = format!(r#"{{"first":{},"len":2}}"#, isize::MAX);
        let res: Result<AxisRange, _> = serde_json::from_str(&json);
        assert!(res.is_err());
    }
}
