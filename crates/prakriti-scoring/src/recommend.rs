use std::sync::LazyLock;

use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::recommendation::{
    FoodsToAvoid, FoodsToFavor, MealTiming, RecommendationBundle,
};

/// Guidance for a dominant category.
pub fn lookup(dosha: Dosha) -> &'static RecommendationBundle {
    match dosha {
        Dosha::Vata => &VATA,
        Dosha::Pitta => &PITTA,
        Dosha::Kapha => &KAPHA,
    }
}

/// Guidance by category name. Unknown names get the general bundle.
pub fn lookup_name(name: &str) -> &'static RecommendationBundle {
    match name.parse::<Dosha>() {
        Ok(dosha) => lookup(dosha),
        Err(_) => &GENERAL,
    }
}

static VATA: LazyLock<RecommendationBundle> = LazyLock::new(|| RecommendationBundle {
    category: "vata".to_string(),
    general_guidelines: strings(&[
        "Favor warm, cooked, and easy-to-digest foods",
        "Include healthy fats and oils in your diet",
        "Eat at regular times",
        "Avoid cold, dry, and raw foods",
    ]),
    foods_to_favor: FoodsToFavor {
        grains: strings(&["Rice", "Wheat", "Oats (cooked)", "Quinoa"]),
        vegetables: strings(&["Sweet potatoes", "Carrots", "Beets", "Asparagus", "Cucumber"]),
        fruits: strings(&["Bananas", "Avocados", "Mangoes", "Papayas", "Sweet oranges"]),
        proteins: strings(&["Chicken", "Fish", "Eggs", "Mung dal", "Tofu"]),
        dairy: strings(&["Warm milk", "Ghee", "Butter", "Cheese", "Yogurt (in moderation)"]),
        spices: strings(&["Ginger", "Cinnamon", "Cardamom", "Cumin", "Black pepper"]),
    },
    foods_to_avoid: FoodsToAvoid {
        general: strings(&["Cold foods", "Dry snacks", "Raw vegetables", "Carbonated drinks"]),
        specific: strings(&["Popcorn", "Crackers", "Raw apples", "Cabbage", "Beans"]),
    },
    meal_timing: MealTiming {
        breakfast: "7:00 - 8:00 AM".to_string(),
        lunch: "12:00 - 1:00 PM".to_string(),
        dinner: "6:00 - 7:00 PM".to_string(),
        notes: "Avoid skipping meals. Have warm milk before bed.".to_string(),
    },
    lifestyle: strings(&[
        "Keep a consistent daily routine",
        "Go to bed before 10 PM",
        "Daily warm oil self-massage",
        "Stay warm and avoid cold, windy weather",
    ]),
    exercise: strings(&[
        "Gentle yoga and stretching",
        "Walking and light swimming",
        "Avoid exhausting, high-impact sessions",
    ]),
});

static PITTA: LazyLock<RecommendationBundle> = LazyLock::new(|| RecommendationBundle {
    category: "pitta".to_string(),
    general_guidelines: strings(&[
        "Favor cool, refreshing foods",
        "Avoid spicy, sour, and salty foods",
        "Eat at moderate temperatures",
        "Include sweet, bitter, and astringent tastes",
    ]),
    foods_to_favor: FoodsToFavor {
        grains: strings(&["Basmati rice", "Wheat", "Oats", "Barley"]),
        vegetables: strings(&["Cucumber", "Lettuce", "Broccoli", "Cauliflower", "Zucchini"]),
        fruits: strings(&["Sweet grapes", "Melons", "Pears", "Sweet apples", "Coconut"]),
        proteins: strings(&["Chicken (white meat)", "Fish (freshwater)", "Mung beans", "Tofu"]),
        dairy: strings(&["Milk", "Butter", "Ghee", "Soft cheese", "Ice cream (occasionally)"]),
        spices: strings(&["Coriander", "Fennel", "Mint", "Turmeric", "Small amounts of cumin"]),
    },
    foods_to_avoid: FoodsToAvoid {
        general: strings(&["Hot spices", "Sour foods", "Fermented foods", "Fried foods"]),
        specific: strings(&["Chili peppers", "Tomatoes", "Vinegar", "Alcohol", "Coffee"]),
    },
    meal_timing: MealTiming {
        breakfast: "7:30 - 8:30 AM".to_string(),
        lunch: "12:00 - 1:00 PM (largest meal)".to_string(),
        dinner: "6:00 - 7:00 PM".to_string(),
        notes: "Never skip meals, especially lunch. Avoid eating when angry.".to_string(),
    },
    lifestyle: strings(&[
        "Avoid overheating and midday sun",
        "Make time for leisure and cooling activities",
        "Moonlit or evening walks",
    ]),
    exercise: strings(&[
        "Swimming and cycling at moderate intensity",
        "Exercise in the cooler parts of the day",
        "Avoid overly competitive workouts",
    ]),
});

static KAPHA: LazyLock<RecommendationBundle> = LazyLock::new(|| RecommendationBundle {
    category: "kapha".to_string(),
    general_guidelines: strings(&[
        "Favor light, warm, and spicy foods",
        "Minimize heavy, oily, and sweet foods",
        "Include pungent, bitter, and astringent tastes",
        "Avoid overeating and snacking",
    ]),
    foods_to_favor: FoodsToFavor {
        grains: strings(&["Barley", "Millet", "Buckwheat", "Corn", "Rye"]),
        vegetables: strings(&["Leafy greens", "Broccoli", "Cabbage", "Peppers", "Onions"]),
        fruits: strings(&["Apples", "Pears", "Pomegranates", "Cranberries", "Apricots"]),
        proteins: strings(&[
            "Chicken",
            "Turkey",
            "Most beans and lentils",
            "Small amounts of egg whites",
        ]),
        dairy: strings(&["Low-fat milk", "Small amounts of ghee", "Goat milk products"]),
        spices: strings(&["All spices, especially ginger", "Black pepper", "Turmeric", "Chili"]),
    },
    foods_to_avoid: FoodsToAvoid {
        general: strings(&["Heavy foods", "Fried foods", "Excessive sweets", "Cold foods"]),
        specific: strings(&["Red meat", "Wheat", "Most dairy", "Bananas", "Coconut"]),
    },
    meal_timing: MealTiming {
        breakfast: "Light or skip if not hungry".to_string(),
        lunch: "12:00 - 1:00 PM (main meal)".to_string(),
        dinner: "6:00 - 7:00 PM (light)".to_string(),
        notes: "Can benefit from intermittent fasting. Avoid snacking.".to_string(),
    },
    lifestyle: strings(&[
        "Wake early, before 6 AM",
        "Avoid daytime naps",
        "Seek variety and new stimulation",
    ]),
    exercise: strings(&[
        "Vigorous daily exercise",
        "Running, brisk hiking, or dynamic yoga",
        "Aim to break a sweat",
    ]),
});

static GENERAL: LazyLock<RecommendationBundle> = LazyLock::new(|| RecommendationBundle {
    category: "general".to_string(),
    general_guidelines: strings(&[
        "Eat fresh, seasonal, home-cooked meals",
        "Eat at regular times and avoid overeating",
        "Stay hydrated with warm or room-temperature water",
    ]),
    foods_to_favor: FoodsToFavor {
        grains: strings(&["Rice", "Oats", "Whole wheat"]),
        vegetables: strings(&["Seasonal vegetables", "Leafy greens"]),
        fruits: strings(&["Seasonal fruits"]),
        proteins: strings(&["Lentils", "Mung beans", "Fish"]),
        dairy: strings(&["Ghee in moderation", "Buttermilk"]),
        spices: strings(&["Turmeric", "Cumin", "Ginger"]),
    },
    foods_to_avoid: FoodsToAvoid {
        general: strings(&["Highly processed foods", "Excess sugar"]),
        specific: strings(&["Reheated leftovers", "Deep-fried snacks"]),
    },
    meal_timing: MealTiming {
        breakfast: "7:00 - 9:00 AM".to_string(),
        lunch: "12:00 - 1:30 PM (main meal)".to_string(),
        dinner: "6:00 - 7:30 PM".to_string(),
        notes: "Leave two to three hours between dinner and sleep.".to_string(),
    },
    lifestyle: strings(&["Keep regular sleep and wake times", "Practice daily relaxation"]),
    exercise: strings(&["At least 30 minutes of moderate activity daily"]),
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
