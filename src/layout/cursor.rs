use crate::units::Pt;

/// Where a reserved block of content ended up
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    /// The y coordinate of the bottom edge of the reserved block
    pub y: Pt,
    /// Whether a new page has to be started before drawing at `y`
    pub page_break: bool,
}

/// Tracks how much vertical space of the current page has been used.
///
/// Content is stacked from the top of the page downwards. Coordinates follow
/// PDF conventions, so `current_y` starts high (`page_height - margin_top`)
/// and decreases as content is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    current_y: Pt,
    page_width: Pt,
    page_height: Pt,
    margin_top: Pt,
    margin_bottom: Pt,
}

impl PageCursor {
    pub fn new(page_width: Pt, page_height: Pt, margin_top: Pt, margin_bottom: Pt) -> PageCursor {
        PageCursor {
            current_y: page_height - margin_top,
            page_width,
            page_height,
            margin_top,
            margin_bottom,
        }
    }

    pub fn current_y(&self) -> Pt {
        self.current_y
    }

    pub fn page_width(&self) -> Pt {
        self.page_width
    }

    pub fn page_height(&self) -> Pt {
        self.page_height
    }

    pub fn margin_top(&self) -> Pt {
        self.margin_top
    }

    pub fn margin_bottom(&self) -> Pt {
        self.margin_bottom
    }

    /// The y coordinate content starts at on a fresh page
    pub fn page_top(&self) -> Pt {
        self.page_height - self.margin_top
    }

    /// Whether nothing has been placed on the current page yet
    pub fn at_page_top(&self) -> bool {
        self.current_y >= self.page_top()
    }

    /// Reserves `height` of vertical space and moves the cursor below it.
    ///
    /// If the block would cross the bottom margin, the cursor moves to the top
    /// of a new page first and the returned placement asks for a page break.
    /// The position is recomputed only once, so content taller than the usable
    /// page height starts at the top of the new page and runs past its bottom
    /// margin.
    pub fn reserve(&mut self, height: Pt) -> Placement {
        let mut tentative = self.current_y - height;
        let mut page_break = false;

        if tentative < self.margin_bottom {
            self.current_y = self.page_top();
            tentative = self.current_y - height;
            page_break = true;
        }

        let y = self.current_y - height;
        self.current_y = tentative;
        Placement { y, page_break }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a4_cursor() -> PageCursor {
        PageCursor::new(Pt(595.0), Pt(842.0), Pt(20.0), Pt(30.0))
    }

    #[test]
    fn starts_below_the_top_margin() {
        let cursor = a4_cursor();
        assert_eq!(cursor.current_y(), Pt(822.0));
        assert!(cursor.at_page_top());
    }

    #[test]
    fn stacks_content_downwards() {
        let mut cursor = a4_cursor();
        let first = cursor.reserve(Pt(10.0));
        let second = cursor.reserve(Pt(12.0));
        assert_eq!(first, Placement { y: Pt(812.0), page_break: false });
        assert_eq!(second, Placement { y: Pt(800.0), page_break: false });
        assert_eq!(cursor.current_y(), Pt(800.0));
    }

    #[test]
    fn breaks_when_crossing_the_bottom_margin() {
        let mut cursor = a4_cursor();
        // leave exactly 12pt above the bottom margin
        cursor.reserve(Pt(822.0 - 30.0 - 12.0));
        let fits = cursor.reserve(Pt(12.0));
        assert!(!fits.page_break);
        assert_eq!(fits.y, Pt(30.0));

        let next = cursor.reserve(Pt(12.0));
        assert!(next.page_break);
        assert_eq!(next.y, Pt(810.0));
        assert_eq!(cursor.current_y(), Pt(810.0));
    }

    #[test]
    fn oversized_content_breaks_at_most_once() {
        let mut cursor = a4_cursor();
        let huge = cursor.reserve(Pt(5000.0));
        assert!(huge.page_break);
        assert_eq!(huge.y, Pt(822.0 - 5000.0));
        assert_eq!(cursor.current_y(), Pt(822.0 - 5000.0));

        // the page is overfull, so the next block goes to a new page
        let after = cursor.reserve(Pt(10.0));
        assert!(after.page_break);
        assert_eq!(after.y, Pt(812.0));

        let again = cursor.reserve(Pt(5000.0));
        assert!(again.page_break);
        assert_eq!(again.y, Pt(822.0 - 5000.0));
    }
}
