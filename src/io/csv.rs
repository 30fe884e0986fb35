//! Plain CSV writers for charges, field samples, and arrow glyphs.

use std::io::{self, Write};

use crate::charges::Charge;
use crate::fields::FieldSample;
use crate::glyph::ArrowGlyph;

/// Writes one `x,y,ex,ey` row per sample.
pub fn write_field_csv<W: Write>(mut w: W, samples: &[FieldSample]) -> io::Result<()> {
    writeln!(w, "x,y,ex,ey")?;
    for s in samples {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e}",
            s.point.x, s.point.y, s.vector.x, s.vector.y
        )?;
    }
    Ok(())
}

/// Writes one `id,q,x,y` row per charge, in store order.
pub fn write_charges_csv<W: Write>(mut w: W, charges: &[Charge]) -> io::Result<()> {
    writeln!(w, "id,q,x,y")?;
    for c in charges {
        writeln!(
            w,
            "{},{:.16e},{:.16e},{:.16e}",
            c.id.get(),
            c.q,
            c.position.x,
            c.position.y
        )?;
    }
    Ok(())
}

/// Writes shaft, wings and polarity for each glyph.
pub fn write_glyphs_csv<W: Write>(mut w: W, glyphs: &[ArrowGlyph]) -> io::Result<()> {
    writeln!(w, "x1,y1,x2,y2,wl_x,wl_y,wr_x,wr_y,polarity")?;
    for g in glyphs {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{:.16e},{}",
            g.tail.x,
            g.tail.y,
            g.tip.x,
            g.tip.y,
            g.wing_left.x,
            g.wing_left.y,
            g.wing_right.x,
            g.wing_right.y,
            g.polarity.as_str()
        )?;
    }
    Ok(())
}
