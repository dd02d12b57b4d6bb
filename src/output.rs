use crate::cluster::ClusterOutput;
use std::io::{self, Write};

/// Writes clusters as a single JSON array followed by a newline
///
/// No clusters is written as `[]`.
pub fn write_clusters<W: Write>(mut writer: W, clusters: &[ClusterOutput]) -> io::Result<()> {
    serde_json::to_writer(&mut writer, clusters)?;
    writeln!(writer)?;
    writer.flush()
}
