//! Template file contents

/// `src/app.js`: Express application assembly
pub const APP_JS: &str = r#"const express = require("express");
const cors = require("cors");
const errorHandler = require("./middlewares/error.middleware");

const app = express();

app.use(cors());
app.use(express.json());

// Routes
const exampleRoutes = require("./routes/example.routes");
app.use("/api/examples", exampleRoutes);

// Error handler
app.use(errorHandler);

module.exports = app;
"#;

/// `server.js`: process entry point
pub const SERVER_JS: &str = r#"require("dotenv").config();
const app = require("./src/app");

const PORT = process.env.PORT || 5000;

app.listen(PORT, () => {
  console.log(`🚀 Server running on port ${PORT}`);
});
"#;

/// `src/routes/example.routes.js`: list and create routes
pub const ROUTES_JS: &str = r#"const express = require("express");
const router = express.Router();
const exampleController = require("../controllers/example.controller");

router.get("/", exampleController.getExamples);
router.post("/", exampleController.createExample);

module.exports = router;
"#;

/// `src/controllers/example.controller.js`
pub const CONTROLLER_JS: &str = r#"const exampleService = require("../services/example.service");

exports.getExamples = async (req, res, next) => {
  try {
    const data = await exampleService.getExamples();
    res.status(200).json({ success: true, data });
  } catch (err) {
    next(err);
  }
};

exports.createExample = async (req, res, next) => {
  try {
    const result = await exampleService.createExample(req.body);
    res.status(201).json({ success: true, data: result });
  } catch (err) {
    next(err);
  }
};
"#;

/// `src/services/example.service.js`
pub const SERVICE_JS: &str = r#"exports.getExamples = async () => {
  return [
    { id: 1, name: "Example One" },
    { id: 2, name: "Example Two" },
  ];
};

exports.createExample = async (data) => {
  if (!data.name) {
    const err = new Error("Name is required");
    err.statusCode = 400;
    throw err;
  }

  return {
    id: Date.now(),
    name: data.name,
  };
};
"#;

/// `src/models/example.model.js`: empty placeholder
pub const MODEL_JS: &str = r"// Example model placeholder
module.exports = {};
";

/// `src/middlewares/error.middleware.js`
pub const ERROR_MIDDLEWARE_JS: &str = r#"module.exports = (err, req, res, next) => {
  const status = err.statusCode || 500;

  res.status(status).json({
    success: false,
    message: err.message || "Internal Server Error",
  });
};
"#;

/// `.env`
pub const ENV_FILE: &str = "PORT=5000\n";

/// `.gitignore`
pub const GITIGNORE: &str = r"node_modules
.env
";

/// `README.md`
pub const README_MD: &str = r"# {{project_name}}

## Run project
```bash
npm run dev
```

## API
- GET  /api/examples
- POST /api/examples
";
