//! CSV tables in and out of the library types (via polars).
//!
//! Layout
//! - Points and mesh vertices: header row, float columns `x,y,z`.
//! - Mesh faces: header row, non-negative integer columns `a,b,c`. Float or
//!   negative indices are rejected, never truncated.
//! - Extra columns are ignored; nulls are rejected.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use nalgebra::Point3;
use polars::prelude::*;

/// Select `names`, cast to `dtype` when given, else keep the inferred type.
fn read_columns(path: &Path, names: [&str; 3], dtype: Option<DataType>) -> Result<DataFrame> {
    let lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select(names.map(|n| match &dtype {
            Some(t) => col(n).cast(t.clone()),
            None => col(n),
        }))
        .collect()
        .with_context(|| format!("reading columns {names:?} from {}", path.display()))?;
    Ok(df)
}

/// Read `x,y,z` rows as points.
pub fn read_points(path: &Path) -> Result<Vec<Point3<f64>>> {
    let df = read_columns(path, ["x", "y", "z"], Some(DataType::Float64))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let zs = df.column("z")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, ((x, y), z)) in xs.into_iter().zip(ys).zip(zs).enumerate() {
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => out.push(Point3::new(x, y, z)),
            _ => bail!("{}: row {row} has a missing coordinate", path.display()),
        }
    }
    tracing::debug!(rows = out.len(), path = %path.display(), "read_points");
    Ok(out)
}

/// Read `a,b,c` rows as triangle vertex indices.
pub fn read_faces(path: &Path) -> Result<Vec<[usize; 3]>> {
    let names = ["a", "b", "c"];
    let df = read_columns(path, names, None)?;
    let mut cols = Vec::with_capacity(3);
    for name in names {
        let raw = df.column(name)?;
        if !raw.dtype().is_integer() {
            bail!(
                "{}: column {name} is {}, expected integer indices",
                path.display(),
                raw.dtype()
            );
        }
        let idx = raw
            .strict_cast(&DataType::UInt64)
            .with_context(|| format!("{}: column {name} has a negative index", path.display()))?;
        cols.push(idx);
    }
    let (a, b, c) = (cols[0].u64()?, cols[1].u64()?, cols[2].u64()?);
    let mut out = Vec::with_capacity(df.height());
    for (row, ((a, b), c)) in a.into_iter().zip(b).zip(c).enumerate() {
        match (a, b, c) {
            (Some(a), Some(b), Some(c)) => out.push([a as usize, b as usize, c as usize]),
            _ => bail!("{}: row {row} has a missing index", path.display()),
        }
    }
    tracing::debug!(rows = out.len(), path = %path.display(), "read_faces");
    Ok(out)
}

/// Write points as an `x,y,z` CSV (with header).
pub fn write_points(path: &Path, points: &[Point3<f64>]) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = points.iter().map(|p| p.z).collect();
    let mut df = DataFrame::new(vec![
        Series::new("x".into(), xs),
        Series::new("y".into(), ys),
        Series::new("z".into(), zs),
    ])?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_and_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y,z,label\n0,0,0,a\n2,0.5,-1,b\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.5, -1.0)]);
    }

    #[test]
    fn missing_column_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn faces_parse_as_indices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("faces.csv");
        fs::write(&path, "a,b,c\n0,1,2\n2,3,0\n").unwrap();
        assert_eq!(read_faces(&path).unwrap(), vec![[0, 1, 2], [2, 3, 0]]);
    }

    #[test]
    fn fractional_face_index_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("faces.csv");
        fs::write(&path, "a,b,c\n0,1.5,2\n").unwrap();
        let err = read_faces(&path).unwrap_err();
        assert!(format!("{err:#}").contains("column b"), "{err:#}");
    }

    #[test]
    fn negative_face_index_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("faces.csv");
        fs::write(&path, "a,b,c\n0,1,2\n-1,2,3\n").unwrap();
        let err = read_faces(&path).unwrap_err();
        assert!(format!("{err:#}").contains("negative"), "{err:#}");
    }

    #[test]
    fn written_points_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let pts = vec![Point3::new(0.25, -1.5, 3.0), Point3::new(1.0, 2.0, 4.0)];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }
}
