// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The labeled training corpus compiled into the binary.
//!
//! Hand-curated and kept verbatim, duplicates included. Some near-identical
//! price and market questions carry different labels; the classifier reports
//! exact conflicts at build time but does not try to resolve them.

use qroute_core::QueryLabel::{self, Dynamic, Sql, Static};

/// One `(query, label)` training example.
pub type LabeledExample = (&'static str, QueryLabel);

/// Reference training corpus.
pub const TRAINING_DATA: &[LabeledExample] = &[
    ("What is the weather today?", Dynamic),
    ("Tell me a joke", Static),
    ("Latest news updates", Dynamic),
    ("Rate of any currency", Dynamic),
    ("tell me the weather", Dynamic),
    ("Do you know", Dynamic),
    ("USD rate in INR", Dynamic),
    ("Current rate of USD", Dynamic),
    ("How do I bake a cake?", Static),
    ("What is langchain?", Static),
    ("What is noun?", Static),
    ("Current stock prices", Dynamic),
    ("Today's news headlines", Dynamic),
    ("Thank you or appreciation or anger", Static),
    ("Hi, how are you?", Static),
    ("I am happy", Static),
    ("You are best", Static),
    ("What are the latest updates in AI research?", Dynamic),
    ("What’s the newest technology in AI?", Dynamic),
    ("Tell me about the new developments in AI.", Dynamic),
    ("What’s the best way to make money?", Static),
    ("How can I earn more?", Static),
    ("What are some tips for making money?", Static),
    ("What is the forecast for the weather in New York?", Dynamic),
    ("How much is Bitcoin right now?", Dynamic),
    ("What happened in the last football game?", Dynamic),
    ("What was the price of Bitcoin in 2017?", Static),
    ("What is the exchange rate between USD and EUR?", Dynamic),
    ("What is the current USD to EUR exchange rate?", Dynamic),
    ("What is the price of Apple stock?", Dynamic),
    ("Give me a recipe for a cake.", Static),
    ("Teach me how to bake a cake.", Static),
    ("What is the current time in London?", Dynamic),
    ("What is the price of gold today?", Dynamic),
    ("What is the price of crude oil?", Dynamic),
    ("What is the capital of Japan?", Static),
    ("Who won the latest election?", Dynamic),
    ("When is the next big sporting event?", Dynamic),
    ("What are the latest trends in technology?", Dynamic),
    ("What is the best programming language?", Static),
    ("Can you tell me the current temperature in Berlin?", Dynamic),
    ("What’s the best strategy to make money from real estate?", Static),
    ("What’s the most popular music genre right now?", Dynamic),
    ("How do I use Langchain in a Python project?", Static),
    ("What’s the best way to learn machine learning?", Static),
    ("What is the price of Bitcoin in 2023?", Static),
    ("What happened in the latest stock market crash?", Dynamic),
    ("How much did Apple earn last quarter?", Dynamic),
    ("Can you suggest some stock investment tips?", Static),
    ("What are the stock prices for Tesla today?", Dynamic),
    ("How do I build a website?", Static),
    ("What are the best websites for learning Python?", Static),
    ("How is the economy doing today?", Dynamic),
    ("What are the top tech companies to watch?", Dynamic),
    ("How much does a Bitcoin cost today?", Dynamic),
    ("What’s the weather in San Francisco tomorrow?", Dynamic),
    ("What’s the average income of a software developer?", Static),
    ("When does the stock market open?", Dynamic),
    ("What time does the stock market close?", Dynamic),
    ("What is the capital of Canada?", Static),
    ("What was the temperature in New York last week?", Static),
    ("How do I bake a pie?", Static),
    ("Give me a stock forecast for next week.", Dynamic),
    ("What are the best practices for AI development?", Static),
    ("What are the top 5 richest countries in the world?", Static),
    ("What’s the best investment for 2025?", Dynamic),
    ("What’s the latest news about the electric car industry?", Dynamic),
    ("What was the price of gold in 2005?", Static),
    ("Give me some stock trading tips.", Static),
    ("What was the latest price of Bitcoin?", Dynamic),
    ("Tell me about the latest trends in e-commerce.", Dynamic),
    ("What are the best tips for self-development?", Static),
    ("Can you suggest some great books on economics?", Static),
    ("What is the exchange rate between GBP and JPY?", Dynamic),
    ("Can you tell me the current exchange rate for USD?", Dynamic),
    ("What is the next big cryptocurrency?", Dynamic),
    ("What is the weather like in Tokyo today?", Dynamic),
    ("How much is the price of silver today?", Dynamic),
    ("When is the next World Cup?", Dynamic),
    ("What’s the price of real estate in New York?", Dynamic),
    ("How much is the price of crude oil today?", Dynamic),
    ("What is the best cryptocurrency to invest in right now?", Dynamic),
    ("What was the most significant tech advancement in 2024?", Dynamic),
    ("What is the current exchange rate of USD to CNY?", Dynamic),
    ("What is your name?", Static),
    ("How old are you?", Static),
    ("Where are you from?", Static),
    ("Tell me about your family", Static),
    ("What is your favorite color?", Static),
    ("What are your hobbies?", Static),
    ("What did you have for lunch?", Static),
    ("How do I tie my shoes?", Static),
    ("Do you like movies?", Static),
    ("How do I get to the nearest store?", Static),
    ("Can you recommend a good book?", Static),
    ("How do I improve my fitness?", Static),
    ("How can I make friends?", Static),
    ("What is the best way to relax?", Static),
    ("What is your favorite food?", Static),
    ("How do I make tea?", Static),
    ("How do I clean my house?", Static),
    ("What is the meaning of life?", Static),
    ("What are your favorite songs?", Static),
    ("How do I start learning a new language?", Static),
    ("What is your favorite movie?", Static),
    ("How do I organize my day?", Static),
    ("What is the capital of France?", Static),
    ("How do I grow my own vegetables?", Static),
    ("Show me all the users of the database", Sql),
    ("Insert a new user with name Alice and email alice@example.com into the database", Sql),
    ("Update the user with ID 2 to have the email alice_updated@example.com", Sql),
    ("Delete user with ID 3", Sql),
    ("List all products in the database", Sql),
    ("Insert a new product with name 'Smartphone' and price 700", Sql),
    ("Update product with ID 5 to have price 750", Sql),
    ("Delete product with ID 4", Sql),
    ("Show all orders in the database", Sql),
    ("Add a new order for user ID 1 with product ID 2 and quantity 3", Sql),
    ("Update order with ID 10 to set quantity to 5", Sql),
    ("Delete order with ID 12", Sql),
    ("Show the total number of users", Sql),
    ("Show the total number of products", Sql),
    ("List all orders placed by user with ID 2", Sql),
    ("Find all products that cost more than 500", Sql),
    ("Show all users who have placed an order", Sql),
    ("Find the order with the highest quantity", Sql),
    ("List all users who registered after 2022", Sql),
    ("Show the average price of all products", Sql),
    ("Find all orders that were placed on 2023-01-15", Sql),
    ("Insert a new user with name John and email john@example.com of the database", Sql),
    ("Update user with ID 1 to have email john_updated@example.com of the database", Sql),
    ("Delete user with ID 2", Sql),
    ("What are the latest stock prices?", Dynamic),
    ("How much is Bitcoin right now?", Dynamic),
    ("What are the top tech companies to watch?", Dynamic),
    ("List all products", Sql),
    ("Insert a new product with name 'Laptop' and price 1200", Sql),
    ("Update product with ID 3 to have price 1300", Sql),
    ("Delete product with ID 4", Sql),
    ("Write a query to delete product with ID 4", Sql),
    ("Write a query to see all the users", Sql),
    ("Write a query to see all the products", Sql),
    ("Write a query to update the age", Sql),
    ("database", Sql),
];
