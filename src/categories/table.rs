//! The official COCO 2017 detection categories.

use super::CocoCategory;

/// The 80 annotated COCO categories, in id order.
pub(super) static COCO_CATEGORIES: [CocoCategory; 80] = [
    CocoCategory::new("person", 1, "person"),
    CocoCategory::new("vehicle", 2, "bicycle"),
    CocoCategory::new("vehicle", 3, "car"),
    CocoCategory::new("vehicle", 4, "motorcycle"),
    CocoCategory::new("vehicle", 5, "airplane"),
    CocoCategory::new("vehicle", 6, "bus"),
    CocoCategory::new("vehicle", 7, "train"),
    CocoCategory::new("vehicle", 8, "truck"),
    CocoCategory::new("vehicle", 9, "boat"),
    CocoCategory::new("outdoor", 10, "traffic light"),
    CocoCategory::new("outdoor", 11, "fire hydrant"),
    CocoCategory::new("outdoor", 13, "stop sign"),
    CocoCategory::new("outdoor", 14, "parking meter"),
    CocoCategory::new("outdoor", 15, "bench"),
    CocoCategory::new("animal", 16, "bird"),
    CocoCategory::new("animal", 17, "cat"),
    CocoCategory::new("animal", 18, "dog"),
    CocoCategory::new("animal", 19, "horse"),
    CocoCategory::new("animal", 20, "sheep"),
    CocoCategory::new("animal", 21, "cow"),
    CocoCategory::new("animal", 22, "elephant"),
    CocoCategory::new("animal", 23, "bear"),
    CocoCategory::new("animal", 24, "zebra"),
    CocoCategory::new("animal", 25, "giraffe"),
    CocoCategory::new("accessory", 27, "backpack"),
    CocoCategory::new("accessory", 28, "umbrella"),
    CocoCategory::new("accessory", 31, "handbag"),
    CocoCategory::new("accessory", 32, "tie"),
    CocoCategory::new("accessory", 33, "suitcase"),
    CocoCategory::new("sports", 34, "frisbee"),
    CocoCategory::new("sports", 35, "skis"),
    CocoCategory::new("sports", 36, "snowboard"),
    CocoCategory::new("sports", 37, "sports ball"),
    CocoCategory::new("sports", 38, "kite"),
    CocoCategory::new("sports", 39, "baseball bat"),
    CocoCategory::new("sports", 40, "baseball glove"),
    CocoCategory::new("sports", 41, "skateboard"),
    CocoCategory::new("sports", 42, "surfboard"),
    CocoCategory::new("sports", 43, "tennis racket"),
    CocoCategory::new("kitchen", 44, "bottle"),
    CocoCategory::new("kitchen", 46, "wine glass"),
    CocoCategory::new("kitchen", 47, "cup"),
    CocoCategory::new("kitchen", 48, "fork"),
    CocoCategory::new("kitchen", 49, "knife"),
    CocoCategory::new("kitchen", 50, "spoon"),
    CocoCategory::new("kitchen", 51, "bowl"),
    CocoCategory::new("food", 52, "banana"),
    CocoCategory::new("food", 53, "apple"),
    CocoCategory::new("food", 54, "sandwich"),
    CocoCategory::new("food", 55, "orange"),
    CocoCategory::new("food", 56, "broccoli"),
    CocoCategory::new("food", 57, "carrot"),
    CocoCategory::new("food", 58, "hot dog"),
    CocoCategory::new("food", 59, "pizza"),
    CocoCategory::new("food", 60, "donut"),
    CocoCategory::new("food", 61, "cake"),
    CocoCategory::new("furniture", 62, "chair"),
    CocoCategory::new("furniture", 63, "couch"),
    CocoCategory::new("furniture", 64, "potted plant"),
    CocoCategory::new("furniture", 65, "bed"),
    CocoCategory::new("furniture", 67, "dining table"),
    CocoCategory::new("furniture", 70, "toilet"),
    CocoCategory::new("electronic", 72, "tv"),
    CocoCategory::new("electronic", 73, "laptop"),
    CocoCategory::new("electronic", 74, "mouse"),
    CocoCategory::new("electronic", 75, "remote"),
    CocoCategory::new("electronic", 76, "keyboard"),
    CocoCategory::new("electronic", 77, "cell phone"),
    CocoCategory::new("appliance", 78, "microwave"),
    CocoCategory::new("appliance", 79, "oven"),
    CocoCategory::new("appliance", 80, "toaster"),
    CocoCategory::new("appliance", 81, "sink"),
    CocoCategory::new("appliance", 82, "refrigerator"),
    CocoCategory::new("indoor", 84, "book"),
    CocoCategory::new("indoor", 85, "clock"),
    CocoCategory::new("indoor", 86, "vase"),
    CocoCategory::new("indoor", 87, "scissors"),
    CocoCategory::new("indoor", 88, "teddy bear"),
    CocoCategory::new("indoor", 89, "hair drier"),
    CocoCategory::new("indoor", 90, "toothbrush"),
];
