mod shopping_cart;
mod shouting;
