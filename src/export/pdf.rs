//! Minimal PDF assembly: one full-page JPEG per page.

use std::fmt::Write as _;

/// Buffered pages, written out in insertion order by `finish`.
#[derive(Debug)]
pub struct PdfWriter {
    page_width: u32,
    page_height: u32,
    pages: Vec<JpegPage>,
}

#[derive(Debug)]
struct JpegPage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PdfWriter {
    /// Pages are `page_width` × `page_height` points.
    pub fn new(page_width: u32, page_height: u32) -> Self {
        Self {
            page_width,
            page_height,
            pages: Vec::new(),
        }
    }

    /// Append a page showing `jpeg` (baseline JPEG, `width` × `height`
    /// pixels, RGB) stretched over the whole page.
    pub fn push_jpeg_page(&mut self, jpeg: Vec<u8>, width: u32, height: u32) {
        self.pages.push(JpegPage {
            data: jpeg,
            width,
            height,
        });
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn finish(self) -> Vec<u8> {
        // Object numbers: 1 catalog, 2 page tree, then three per page
        // (page, content stream, image).
        let page_obj = |i: usize| 3 + i * 3;
        let mut out: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n");

        offsets.push(out.len());
        out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        let kids = (0..self.pages.len())
            .map(|i| format!("{} 0 R", page_obj(i)))
            .collect::<Vec<_>>()
            .join(" ");
        offsets.push(out.len());
        out.extend_from_slice(
            format!(
                "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
                kids,
                self.pages.len()
            )
            .as_bytes(),
        );

        for (i, page) in self.pages.iter().enumerate() {
            let page_id = page_obj(i);
            let content_id = page_id + 1;
            let image_id = page_id + 2;

            offsets.push(out.len());
            out.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /XObject << /Im0 {} 0 R >> >> /Contents {} 0 R >>\nendobj\n",
                    page_id, self.page_width, self.page_height, image_id, content_id
                )
                .as_bytes(),
            );

            let content = format!(
                "q {} 0 0 {} 0 0 cm /Im0 Do Q",
                self.page_width, self.page_height
            );
            offsets.push(out.len());
            out.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                    content_id,
                    content.len(),
                    content
                )
                .as_bytes(),
            );

            offsets.push(out.len());
            out.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Type /XObject /Subtype /Image /Width {} /Height {} \
                     /ColorSpace /DeviceRGB /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
                    image_id,
                    page.width,
                    page.height,
                    page.data.len()
                )
                .as_bytes(),
            );
            out.extend_from_slice(&page.data);
            out.extend_from_slice(b"\nendstream\nendobj\n");
        }

        let xref_at = out.len();
        let mut xref = String::new();
        let _ = write!(xref, "xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
        for offset in &offsets {
            let _ = write!(xref, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_at
        );
        out.extend_from_slice(xref.as_bytes());
        out
    }
}

/// Count `/Type /Page ` entries; enough to check what `PdfWriter` produced.
pub fn count_pages(pdf: &[u8]) -> usize {
    let needle = b"/Type /Page ";
    pdf.windows(needle.len()).filter(|w| *w == needle).count()
}
