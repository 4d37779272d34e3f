//! Built-in sample posts
//!
//! Shown whenever the manifest cannot be fetched or parsed, so the site
//! always has something to render. Bodies are markdown; the loader runs them
//! through the same converter as fetched posts.

use super::Post;

/// The fixed fallback collection, already in descending-date order.
pub fn sample_posts() -> Vec<Post> {
    vec![
        sample(
            "clean-architecture-getting-started",
            "Getting Started with Clean Architecture",
            "2025-01-15",
            &["architecture", "design-patterns", "software-engineering"],
            "Learn the fundamentals of Clean Architecture and how it can improve your software design.",
            CLEAN_ARCHITECTURE,
        ),
        sample(
            "javascript-best-practices-2025",
            "Modern JavaScript Best Practices 2025",
            "2025-01-10",
            &["javascript", "best-practices", "web-development"],
            "Discover the latest JavaScript best practices for 2025, including new language features and modern development patterns.",
            JAVASCRIPT_BEST_PRACTICES,
        ),
        sample(
            "scalable-apis-nodejs",
            "Building Scalable APIs with Node.js",
            "2025-01-05",
            &["nodejs", "api", "backend", "scalability"],
            "Learn how to build scalable and maintainable APIs using Node.js, covering caching, layering and security.",
            SCALABLE_APIS,
        ),
    ]
}

fn sample(slug: &str, title: &str, date: &str, tags: &[&str], excerpt: &str, body: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        excerpt: excerpt.to_string(),
        raw: body.to_string(),
        content: String::new(),
    }
}

const CLEAN_ARCHITECTURE: &str = r#"# Getting Started with Clean Architecture

Clean Architecture is a software design philosophy that emphasizes separation
of concerns and dependency inversion.

## Core Principles

* **Independence of Frameworks**: the architecture doesn't depend on external libraries
* **Testable**: business rules can be tested without UI or database
* **Independence of UI**: the UI can change without changing the system
* **Independence of Database**: business rules are not bound to the database

## Implementation Strategy

When implementing Clean Architecture, consider these layers:

1. **Entities** - core business logic
2. **Use Cases** - application-specific business rules
3. **Interface Adapters** - convert data between use cases and external agencies
4. **Frameworks & Drivers** - web, database, external interfaces

> Clean Architecture helps create systems that are easier to understand,
> develop, and maintain over time.
"#;

const JAVASCRIPT_BEST_PRACTICES: &str = r#"# Modern JavaScript Best Practices 2025

JavaScript continues to evolve rapidly. Here are the essentials.

## Language Features to Use

```javascript
// Top-level await
const data = await fetch('/api/data');
const result = await data.json();
```

## Performance Best Practices

* Use **const** and **let** instead of **var**
* Leverage **async/await** for better readability
* Implement **proper error handling**

## Code Organization

1. Clear module boundaries
2. Consistent naming conventions
3. Comprehensive documentation

> Modern JavaScript development is about writing clean, maintainable, and
> performant code that scales with your application.
"#;

const SCALABLE_APIS: &str = r#"# Building Scalable APIs with Node.js

Building APIs that can handle growth requires careful planning.

## Essential Architecture Patterns

Structure your API with distinct layers:

* **Route Layer** - handle HTTP requests
* **Service Layer** - business logic
* **Data Access Layer** - database operations

## Caching Strategy

```javascript
const cached = await client.get(`post:${id}`);
if (cached) return JSON.parse(cached);
```

## Security Best Practices

1. **Authentication & Authorization**
2. **Rate Limiting**
3. **Input Validation**

> Scalable APIs require thoughtful architecture, proper caching, and robust
> security measures from day one.
"#;
