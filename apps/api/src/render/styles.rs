//! Stylesheet embedded in every rendered portfolio page.

pub const PORTFOLIO_CSS: &str = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #e0e0e0;
    background: linear-gradient(135deg, #0f0f23 0%, #1a1a2e 50%, #16213e 100%);
    min-height: 100vh;
    overflow-x: hidden;
}
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}
.portfolio {
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(20px);
    border-radius: 25px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.3);
    overflow: hidden;
    margin: 20px 0;
    animation: fadeInUp 1s ease-out;
}
@keyframes fadeInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
.header {
    background: linear-gradient(135deg, rgba(102, 126, 234, 0.9) 0%, rgba(118, 75, 162, 0.9) 50%, rgba(240, 147, 251, 0.9) 100%), 
                radial-gradient(circle at 20% 80%, rgba(120, 119, 198, 0.3) 0%, transparent 50%),
                radial-gradient(circle at 80% 20%, rgba(255, 119, 198, 0.3) 0%, transparent 50%),
                radial-gradient(circle at 40% 40%, rgba(120, 219, 255, 0.3) 0%, transparent 50%);
    background-size: cover, 100% 100%, 100% 100%, 100% 100%;
    background-position: center, center, center, center;
    background-attachment: fixed, fixed, fixed, fixed;
    background-repeat: no-repeat, no-repeat, no-repeat, no-repeat;
    color: white;
    padding: 80px 40px;
    text-align: center;
    position: relative;
    overflow: hidden;
}
.header::after {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%);
    z-index: 0;
    opacity: 0;
    transition: opacity 0.3s ease;
}
.header.no-image::after {
    opacity: 1;
}
.header::before {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    bottom: 0;
    background: linear-gradient(135deg, rgba(15, 15, 35, 0.7) 0%, rgba(26, 26, 46, 0.6) 50%, rgba(22, 33, 62, 0.7) 100%);
    z-index: 1;
}
.header-content {
    position: relative;
    z-index: 2;
}
.profile-img {
    width: 180px;
    height: 180px;
    border-radius: 50%;
    border: 5px solid rgba(255, 255, 255, 0.4);
    margin: 0 auto 30px;
    display: block;
    object-fit: cover;
    background: #2a2a3e;
    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.4), 0 0 30px rgba(102, 126, 234, 0.3);
    transition: all 0.3s ease;
    animation: float 6s ease-in-out infinite;
}
.profile-img:hover {
    transform: scale(1.05) rotate(5deg);
    border-color: rgba(255, 255, 255, 0.8);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.5), 0 0 40px rgba(102, 126, 234, 0.5);
}
@keyframes float {
    0%, 100% { transform: translateY(0px); }
    50% { transform: translateY(-10px); }
}
.name {
    font-size: 3rem;
    font-weight: bold;
    margin-bottom: 15px;
    text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.3);
    animation: slideInDown 1s ease-out 0.3s both;
}
@keyframes slideInDown {
    from {
        opacity: 0;
        transform: translateY(-30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
.title {
    font-size: 1.4rem;
    opacity: 0.9;
    margin-bottom: 30px;
    animation: slideInDown 1s ease-out 0.5s both;
}
.contact-info {
    display: flex;
    justify-content: center;
    gap: 25px;
    flex-wrap: wrap;
    animation: slideInDown 1s ease-out 0.7s both;
}
.contact-item {
    display: flex;
    align-items: center;
    gap: 10px;
    background: rgba(255, 255, 255, 0.1);
    padding: 12px 20px;
    border-radius: 25px;
    backdrop-filter: blur(10px);
    border: 1px solid rgba(255, 255, 255, 0.2);
    transition: all 0.3s ease;
    cursor: pointer;
    text-decoration: none;
    color: white;
    position: relative;
    overflow: hidden;
    font-weight: 500;
}
.contact-item::before {
    content: '';
    position: absolute;
    top: 0;
    left: -100%;
    width: 100%;
    height: 100%;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
    transition: left 0.5s ease;
}
.contact-item:hover::before {
    left: 100%;
}
.contact-item:hover {
    background: rgba(255, 255, 255, 0.2);
    transform: translateY(-3px) scale(1.05);
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
}
.contact-item.phone:hover {
    background: linear-gradient(135deg, #28a745, #20c997);
    box-shadow: 0 10px 25px rgba(40, 167, 69, 0.3);
    border-color: #28a745;
}
.contact-item.email:hover {
    background: linear-gradient(135deg, #007bff, #0056b3);
    box-shadow: 0 10px 25px rgba(0, 123, 255, 0.3);
    border-color: #007bff;
}
.contact-item.location:hover {
    background: linear-gradient(135deg, #dc3545, #c82333);
    box-shadow: 0 10px 25px rgba(220, 53, 69, 0.3);
    border-color: #dc3545;
}
.contact-item i {
    font-size: 1.1rem;
    transition: transform 0.3s ease;
}
.contact-item:hover i {
    transform: scale(1.2);
}
.section {
    padding: 50px 40px;
    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    position: relative;
}
.section:last-child {
    border-bottom: none;
}
.section::before {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 1px;
    background: linear-gradient(90deg, transparent, rgba(102, 126, 234, 0.5), transparent);
}
.section-title {
    font-size: 2.2rem;
    color: #667eea;
    margin-bottom: 30px;
    border-bottom: 3px solid #667eea;
    padding-bottom: 15px;
    position: relative;
    display: inline-block;
}
.section-title::after {
    content: '';
    position: absolute;
    bottom: -3px;
    left: 0;
    width: 50px;
    height: 3px;
    background: linear-gradient(90deg, #667eea, #f093fb);
    animation: expandWidth 2s ease-out;
}
@keyframes expandWidth {
    from { width: 0; }
    to { width: 50px; }
}
.about-text {
    font-size: 1.2rem;
    line-height: 1.8;
    color: #b0b0b0;
    text-align: justify;
}
.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 25px;
    margin-top: 30px;
}
.skill-item {
    background: rgba(255, 255, 255, 0.05);
    padding: 25px;
    border-radius: 15px;
    border-left: 4px solid #667eea;
    backdrop-filter: blur(10px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    transition: all 0.3s ease;
    position: relative;
    overflow: hidden;
}
.skill-item::before {
    content: '';
    position: absolute;
    top: 0;
    left: -100%;
    width: 100%;
    height: 100%;
    background: linear-gradient(90deg, transparent, rgba(102, 126, 234, 0.1), transparent);
    transition: left 0.5s ease;
}
.skill-item:hover::before {
    left: 100%;
}
.skill-item:hover {
    transform: translateY(-5px) scale(1.02);
    background: rgba(255, 255, 255, 0.1);
    box-shadow: 0 15px 35px rgba(0, 0, 0, 0.2);
}
.skill-name {
    font-weight: bold;
    color: #ffffff;
    margin-bottom: 8px;
    font-size: 1.1rem;
}
.skill-level {
    color: #667eea;
    font-size: 0.95rem;
    font-weight: 500;
}
.projects-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
    gap: 30px;
    margin-top: 30px;
}
.project-card {
    background: rgba(255, 255, 255, 0.05);
    border-radius: 20px;
    padding: 30px;
    backdrop-filter: blur(10px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    transition: all 0.4s ease;
    position: relative;
    overflow: hidden;
}
.project-card::before {
    content: '';
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 3px;
    background: linear-gradient(90deg, #667eea, #f093fb);
    transform: scaleX(0);
    transition: transform 0.3s ease;
}
.project-card:hover::before {
    transform: scaleX(1);
}
.project-card:hover {
    transform: translateY(-10px) scale(1.02);
    background: rgba(255, 255, 255, 0.1);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
}
.project-title {
    font-size: 1.4rem;
    font-weight: bold;
    color: #ffffff;
    margin-bottom: 15px;
}
.project-description {
    color: #b0b0b0;
    margin-bottom: 20px;
    line-height: 1.7;
}
.project-tech {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
}
.tech-tag {
    background: linear-gradient(135deg, #667eea, #764ba2);
    color: white;
    padding: 6px 15px;
    border-radius: 20px;
    font-size: 0.85rem;
    font-weight: 500;
    transition: all 0.3s ease;
}
.tech-tag:hover {
    transform: scale(1.1);
    box-shadow: 0 5px 15px rgba(102, 126, 234, 0.3);
}
.experience-item {
    margin-bottom: 40px;
    padding-left: 30px;
    border-left: 3px solid #667eea;
    position: relative;
    transition: all 0.3s ease;
}
.experience-item::before {
    content: '';
    position: absolute;
    left: -8px;
    top: 0;
    width: 13px;
    height: 13px;
    background: #667eea;
    border-radius: 50%;
    border: 3px solid #1a1a2e;
}
.experience-item:hover {
    transform: translateX(10px);
}
.experience-title {
    font-size: 1.3rem;
    font-weight: bold;
    color: #ffffff;
    margin-bottom: 8px;
}
.experience-company {
    color: #667eea;
    font-weight: 600;
    margin-bottom: 8px;
    font-size: 1.1rem;
}
.experience-date {
    color: #888;
    font-size: 0.95rem;
    margin-bottom: 12px;
    font-style: italic;
}
.experience-description {
    color: #b0b0b0;
    line-height: 1.7;
}
.social-links {
    display: flex;
    justify-content: center;
    gap: 25px;
    margin-top: 30px;
}
.social-link {
    display: inline-block;
    width: 60px;
    height: 60px;
    background: linear-gradient(135deg, #667eea, #764ba2);
    color: white;
    border-radius: 50%;
    text-align: center;
    line-height: 60px;
    text-decoration: none;
    transition: all 0.3s ease;
    font-size: 1.2rem;
    position: relative;
    overflow: hidden;
}
.social-link::before {
    content: '';
    position: absolute;
    top: 0;
    left: -100%;
    width: 100%;
    height: 100%;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
    transition: left 0.5s ease;
}
.social-link:hover::before {
    left: 100%;
}
.social-link:hover {
    transform: translateY(-5px) scale(1.1);
    box-shadow: 0 15px 30px rgba(102, 126, 234, 0.4);
}
::-webkit-scrollbar {
    width: 8px;
}
::-webkit-scrollbar-track {
    background: #1a1a2e;
}
::-webkit-scrollbar-thumb {
    background: linear-gradient(135deg, #667eea, #764ba2);
    border-radius: 4px;
}
::-webkit-scrollbar-thumb:hover {
    background: linear-gradient(135deg, #5a6fd8, #6a4c93);
}
@media (max-width: 768px) {
    .container {
        padding: 10px;
    }
    .header {
        padding: 60px 20px;
    }
    .name {
        font-size: 2.2rem;
    }
    .section {
        padding: 40px 20px;
    }
    .contact-info {
        flex-direction: column;
        gap: 15px;
    }
    .skills-grid {
        grid-template-columns: 1fr;
    }
    .projects-grid {
        grid-template-columns: 1fr;
    }
}"#;
