use iscsigw_common::size;
use tracing::error;

use crate::terminal::print;

pub fn size(sizes: &[String]) -> anyhow::Result<()> {
    let mut invalid: usize = 0;

    for value in sizes {
        match size::convert_to_bytes(value) {
            Ok(bytes) => {
                print::aligned_line(value, format!("{bytes} bytes ({})", size::human_size(bytes)));
            }
            Err(err) => {
                error!("{err}");
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} invalid size(s)");
    }
    Ok(())
}
