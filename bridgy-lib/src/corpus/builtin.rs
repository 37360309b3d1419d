//! Bundled programming knowledge base

use crate::corpus::{Corpus, Document};

impl Corpus {
    /// The fifteen-document programming knowledge base served by the chat helper.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(knowledge_base()).expect("bundled knowledge base is well formed")
    }

    /// The three-document starter set: JavaScript Basics, Python Fundamentals
    /// and HTML Structure.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(starter_documents()).expect("bundled starter set is well formed")
    }
}

fn starter_documents() -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "JavaScript Basics",
            "JavaScript is a programming language that adds interactivity to websites. It runs in the browser and can manipulate HTML and CSS. Key concepts include variables, functions, objects, and event handling.",
            "programming",
            &["javascript", "basics", "web", "frontend"],
        ),
        Document::new(
            "2",
            "Python Fundamentals",
            "Python is a high-level programming language known for its simplicity and readability. It's great for beginners and widely used in data science, web development, and automation.",
            "programming",
            &["python", "basics", "data-science", "automation"],
        ),
        Document::new(
            "3",
            "HTML Structure",
            "HTML (HyperText Markup Language) is the standard markup language for creating web pages. It uses tags to structure content and create the foundation of web pages.",
            "web-development",
            &["html", "markup", "structure", "web"],
        ),
    ]
}

fn knowledge_base() -> Vec<Document> {
    vec![
        Document::new(
            "1",
            "JavaScript Basics",
            "JavaScript is a programming language that adds interactivity to websites. It runs in the browser and can manipulate HTML and CSS. Key concepts include variables, functions, objects, and event handling. Example: const greeting = \"Hello World\"; console.log(greeting);",
            "programming",
            &["javascript", "basics", "web", "frontend", "js"],
        ),
        Document::new(
            "2",
            "Python Fundamentals",
            "Python is a high-level programming language known for its simplicity and readability. It's great for beginners and widely used in data science, web development, and automation. Example: print(\"Hello, World!\") or name = input(\"What's your name?\")",
            "programming",
            &["python", "basics", "data-science", "automation", "py"],
        ),
        Document::new(
            "3",
            "HTML Structure",
            "HTML (HyperText Markup Language) is the standard markup language for creating web pages. It uses tags to structure content and create the foundation of web pages. Example: <h1>Title</h1>, <p>Paragraph</p>, <div>Container</div>",
            "web-development",
            &["html", "markup", "structure", "web", "hypertext"],
        ),
        Document::new(
            "4",
            "CSS Styling",
            "CSS (Cascading Style Sheets) is used to style and layout web pages. It controls colors, fonts, spacing, and responsive design. Example: .button { background-color: blue; padding: 10px; border-radius: 5px; }",
            "web-development",
            &["css", "styling", "design", "layout", "cascading"],
        ),
        Document::new(
            "5",
            "React Components",
            "React is a JavaScript library for building user interfaces. Components are reusable UI pieces that can be composed together to create complex applications. Example: function Welcome(props) { return <h1>Hello, {props.name}</h1>; }",
            "frontend",
            &["react", "components", "ui", "javascript", "jsx"],
        ),
        Document::new(
            "6",
            "Node.js Backend",
            "Node.js is a JavaScript runtime that allows you to run JavaScript on the server side. It's perfect for building scalable network applications. Example: const http = require(\"http\"); const server = http.createServer((req, res) => { res.end(\"Hello World\"); });",
            "backend",
            &["nodejs", "backend", "server", "javascript", "runtime"],
        ),
        Document::new(
            "7",
            "SQL Database Queries",
            "SQL (Structured Query Language) is used to manage and manipulate relational databases. It allows you to create, read, update, and delete data. Example: SELECT * FROM users WHERE age > 18; INSERT INTO users (name, email) VALUES (\"John\", \"john@email.com\");",
            "database",
            &["sql", "database", "queries", "relational", "mysql"],
        ),
        Document::new(
            "8",
            "Git Version Control",
            "Git is a distributed version control system that tracks changes in source code. It enables collaboration and maintains a history of all changes. Example: git add . git commit -m \"Add new feature\" git push origin main",
            "tools",
            &["git", "version-control", "collaboration", "development", "vcs"],
        ),
        Document::new(
            "9",
            "TypeScript Fundamentals",
            "TypeScript is a superset of JavaScript that adds static typing to the language. It helps catch errors at compile time and improves code maintainability. Example: interface User { name: string; age: number; } const user: User = { name: \"John\", age: 25 };",
            "programming",
            &["typescript", "typing", "javascript", "superset", "ts"],
        ),
        Document::new(
            "10",
            "REST API Design",
            "REST APIs use HTTP methods (GET, POST, PUT, DELETE) to perform operations on resources. They follow stateless architecture and use JSON for data exchange. Example: GET /api/users, POST /api/users, PUT /api/users/1, DELETE /api/users/1",
            "backend",
            &["rest", "api", "http", "json", "endpoints"],
        ),
        Document::new(
            "11",
            "Responsive Web Design",
            "Responsive design ensures websites work well on all devices and screen sizes. It uses CSS media queries and flexible layouts. Example: @media (max-width: 768px) { .container { width: 100%; padding: 10px; } }",
            "web-development",
            &["responsive", "design", "mobile", "css", "media-queries"],
        ),
        Document::new(
            "12",
            "Async JavaScript",
            "Asynchronous JavaScript allows code to run in the background without blocking other operations. It uses callbacks, promises, and async/await. Example: async function fetchData() { const response = await fetch(\"/api/data\"); return response.json(); }",
            "programming",
            &["async", "javascript", "promises", "await", "callbacks"],
        ),
        Document::new(
            "13",
            "MongoDB NoSQL",
            "MongoDB is a NoSQL database that stores data in flexible, JSON-like documents. It's great for applications with changing data structures. Example: db.users.insertOne({ name: \"John\", email: \"john@email.com\", age: 25 })",
            "database",
            &["mongodb", "nosql", "document", "database", "bson"],
        ),
        Document::new(
            "14",
            "Docker Containers",
            "Docker allows you to package applications with their dependencies into containers. It ensures consistency across different environments. Example: FROM node:16 WORKDIR /app COPY package*.json ./ RUN npm install COPY . . EXPOSE 3000 CMD [\"npm\", \"start\"]",
            "devops",
            &["docker", "containers", "deployment", "devops", "virtualization"],
        ),
        Document::new(
            "15",
            "Testing with Jest",
            "Jest is a JavaScript testing framework that makes it easy to write and run tests. It provides mocking, assertions, and code coverage. Example: test(\"adds 1 + 2 to equal 3\", () => { expect(sum(1, 2)).toBe(3); });",
            "testing",
            &["jest", "testing", "javascript", "unit-tests", "mocking"],
        ),
    ]
}
