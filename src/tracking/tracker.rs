//! Hand tracker collaborator

use super::frame::Frame;
use crate::sim::{CameraSpace, Rect};

/// Tracker output for one frame
#[derive(Debug, Clone)]
pub struct Detection {
    /// Input frame with the detections drawn on it
    pub annotated: Frame,
    /// Every hand found, in camera space
    pub hands: Vec<Rect<CameraSpace>>,
}

impl Detection {
    /// The hand used for slicing: the largest box, earliest on ties
    pub fn primary(&self) -> Option<Rect<CameraSpace>> {
        self.hands.iter().copied().fold(None, |best, hand| match best {
            Some(b) if b.area() >= hand.area() => Some(b),
            _ => Some(hand),
        })
    }
}

/// Locates hands in a (mirrored) camera frame.
///
/// Implementations may block; the loop waits for them. Finding nothing is a
/// normal result, not an error.
pub trait HandTracker {
    fn locate_hands(&mut self, frame: Frame) -> Detection;

    /// Annotated frame plus at most one hand
    fn locate_hand(&mut self, frame: Frame) -> (Frame, Option<Rect<CameraSpace>>) {
        let detection = self.locate_hands(frame);
        let hand = detection.primary();
        (detection.annotated, hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn detection(hands: Vec<Rect<CameraSpace>>) -> Detection {
        Detection {
            annotated: Frame::new(RgbImage::new(8, 8)).unwrap(),
            hands,
        }
    }

    #[test]
    fn test_primary_is_largest() {
        let d = detection(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 30.0, 20.0),
            Rect::new(100.0, 0.0, 5.0, 5.0),
        ]);
        assert_eq!(d.primary(), Some(Rect::new(50.0, 50.0, 30.0, 20.0)));
    }

    #[test]
    fn test_primary_tie_keeps_first() {
        let d = detection(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 10.0, 10.0),
        ]);
        assert_eq!(d.primary(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_no_hands() {
        assert_eq!(detection(Vec::new()).primary(), None);
    }

    struct TwoHands;

    impl HandTracker for TwoHands {
        fn locate_hands(&mut self, frame: Frame) -> Detection {
            Detection {
                annotated: frame,
                hands: vec![Rect::new(0.0, 0.0, 1.0, 1.0), Rect::new(2.0, 2.0, 3.0, 3.0)],
            }
        }
    }

    #[test]
    fn test_locate_hand_picks_primary() {
        let frame = Frame::new(RgbImage::new(8, 8)).unwrap();
        let (annotated, hand) = TwoHands.locate_hand(frame.clone());
        assert_eq!(annotated, frame);
        assert_eq!(hand, Some(Rect::new(2.0, 2.0, 3.0, 3.0)));
    }
}
