#![allow(dead_code)]

pub const BLUE_APRON_URL: &str =
    "https://www.blueapron.com/recipes/sweet-spicy-udon-noodles-with-fried-eggs-vegetables";
pub const HELLO_FRESH_URL: &str = "https://www.hellofresh.com/recipes/chicken-tacos-5f7a";

/// A Blue Apron recipe page with the given total time and image host.
pub fn blue_apron_page(ready: &str, image_host: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head><title>Sweet &amp; Spicy Udon Noodles | Blue Apron</title></head>
        <body>
            <section class="section-recipe recipe-main row">
                <img src="{image_host}/recipes/udon.jpg?quality=80&amp;width=600">
                <h1>
                    Sweet &amp; Spicy Udon Noodles
                </h1>
                <h2>with Fried Eggs &amp; Vegetables</h2>
                <span class="culinary-badge">Vegetarian</span>
                <div class="ba-info-list__item-value"><span class="total-time">{ready}</span></div>
                <span itemprop="recipeYield">2</span>
                <span itemprop="calories">680 Cals</span>
                <p itemprop="description">Our udon: thick and chewy.</p>
            </section>

            <div class="ba-feature-image ingredients-img-hldr col-md-8">
                <img src="{image_host}/recipes/udon_ingredients.jpg?w=300">
            </div>

            <ul>
                <li itemprop="recipeIngredient">
                    <span>2
                    cups</span>
                    flour
                </li>
                <li itemprop="recipeIngredient">
                    <span>3</span>
                    Pasture-Raised Eggs
                </li>
                <li itemprop="recipeIngredient">
                    <span></span>
                    Sweet Chili Sauce
                </li>
            </ul>

            <div itemprop="recipeInstructions" class="p-15">
                <span>1</span>
                <p>Cook the noodles:</p>
                <p>Heat a large pot of salted water to boiling.</p>
            </div>
            <div itemprop="recipeInstructions" class="p-15">
                <span>2</span>


                <p>Fry the eggs:</p>

                <p>In a pan, heat a drizzle of oil.</p>
            </div>
            <div itemprop="recipeInstructions" class="p-15"><span>3</span>Enjoy!</div>
        </body>
        </html>
        "#
    )
}

pub fn hello_fresh_page() -> String {
    r#"
    <!DOCTYPE html>
    <html>
    <body>
        <img class="fela-_1b1idjb" src="https://img.hellofresh.com/f_auto/image/tacos.png?w=1200">
        <h1>Chicken Tacos</h1>
        <h4>with Lime Crema</h4>
        <p>Crispy tortillas: loaded with chicken.</p>
        <span class="fela-_36rlri">Spicy</span>
        <span class="fela-_fnl8w9">20-Min Meal</span>
        <div>
            <div><span>Preparation Time</span></div>
            <div>20 minutes</div>
        </div>
        <div>
            <div><span>Total Time</span></div>
            <div>25 minutes</div>
        </div>
        <div><span>Calories</span><span>620 kcal</span></div>

        <div class="fela-_1qz307e"><p>1 cup</p><p>Sour Cream</p></div>
        <div class="fela-_1qz307e"><p>2</p><p>Tortillas</p></div>
        <div class="fela-_1qz307e"><p>Salt</p></div>

        <div class="fela-_1qzip4i"><p>Preheat oven: 425 degrees.
        Wash produce.</p></div>
        <div class="fela-_1qzip4i"><p>Serve tacos.</p></div>
    </body>
    </html>
    "#
    .to_string()
}
